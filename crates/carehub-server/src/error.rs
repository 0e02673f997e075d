//! CareHub Flow Errors
//!
//! Error taxonomy for the request flows. Validation and conflict failures
//! are client errors; store failures are server errors and carry the
//! original detail in the message.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use axum::http::StatusCode;
use carehub_store::StoreError;
use thiserror::Error;

// =============================================================================
// Flow Error
// =============================================================================

/// Errors surfaced by the request flows.
#[derive(Debug, Clone, Error)]
pub enum FlowError {
    /// Input failed a record-schema constraint. Raised before any store
    /// access occurs.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A uniqueness check found an existing match. Never reclassified as a
    /// store error at the boundary.
    #[error("{0}")]
    Conflict(String),

    /// The document store could not complete a query or create.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl FlowError {
    /// HTTP status for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
