//! CareHub Server State
//!
//! Application state shared across request handlers. The document store is
//! constructed once at startup and injected here; there is no implicit
//! global handle and no fallback stub.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::config::ServerConfig;
use carehub_store::DocumentStore;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub store: Arc<DocumentStore>,
}

impl AppState {
    /// Create new application state with the given configuration and store.
    pub fn new(config: ServerConfig, store: DocumentStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
