//! CareHub Store Errors
//!
//! @version 0.1.0
//! @author CareHub Development Team

use thiserror::Error;

/// Errors produced by the document store adapter.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store has no live backend; no operation can complete.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The write was refused (oversized document, duplicate identity).
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
