//! CareHub Document Store
//!
//! The adapter owning all collections. Operations are asynchronous; callers
//! are suspended individually and never block unrelated requests. The store
//! performs no cross-call serialization: a check-then-write sequence built
//! on top of it is not atomic.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::collection::Collection;
use crate::error::StoreError;
use crate::filter::Filter;
use crate::types::{Document, DocumentId};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;

/// Result limit applied when the caller does not specify one.
pub const DEFAULT_QUERY_LIMIT: usize = 50;

// =============================================================================
// Store Configuration
// =============================================================================

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Logical database name, reported by the health check.
    pub database: String,
    /// Maximum serialized size of a single document in bytes.
    pub max_document_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: "carehub".to_string(),
            max_document_size: 16 * 1024 * 1024, // 16MB
        }
    }
}

// =============================================================================
// Document Store
// =============================================================================

/// The document store adapter. Collections materialize on first write;
/// querying a collection that does not exist yet yields an empty result.
pub struct DocumentStore {
    config: StoreConfig,
    collections: RwLock<HashMap<String, Collection>>,
    unavailable: Option<String>,
}

impl DocumentStore {
    /// Construct a live store with the given configuration.
    pub fn connect(config: StoreConfig) -> Self {
        Self {
            config,
            collections: RwLock::new(HashMap::new()),
            unavailable: None,
        }
    }

    /// Construct a store in a permanent "unavailable" state. Every operation
    /// returns `StoreError::Unavailable` and the health check reports the
    /// reason; nothing panics.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            config: StoreConfig::default(),
            collections: RwLock::new(HashMap::new()),
            unavailable: Some(reason.into()),
        }
    }

    /// Whether the store can serve operations.
    pub fn is_available(&self) -> bool {
        self.unavailable.is_none()
    }

    /// Get the logical database name.
    pub fn database(&self) -> &str {
        &self.config.database
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Insert one document into the named collection, returning the assigned
    /// identity. Mutates persistent state.
    pub async fn create(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        self.ensure_available()?;

        let size = serde_json::to_vec(&document)
            .map_err(|e| StoreError::WriteRejected(format!("unserializable document: {}", e)))?
            .len();
        if size > self.config.max_document_size {
            return Err(StoreError::WriteRejected(format!(
                "document of {} bytes exceeds maximum size {}",
                size, self.config.max_document_size
            )));
        }

        let mut collections = self.collections.write();
        let coll = collections
            .entry(collection.to_string())
            .or_insert_with(|| Collection::new(collection));
        coll.insert(document)
    }

    /// Return up to `limit` documents from the named collection whose fields
    /// equal the filter's values. Produces an empty sequence, not an error,
    /// when nothing matches. `limit` defaults to [`DEFAULT_QUERY_LIMIT`].
    pub async fn query(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        self.ensure_available()?;

        let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT);
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .map(|c| c.find(filter, limit))
            .unwrap_or_default())
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    /// Get the number of documents in a collection (0 if it does not exist).
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map(|c| c.count())
            .unwrap_or(0)
    }

    /// List all collection names.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Report connectivity and content summary.
    pub fn health(&self) -> StoreHealth {
        let connection_status = match &self.unavailable {
            Some(reason) => format!("unavailable: {}", reason),
            None => "ok".to_string(),
        };
        let collections = self.collection_names();
        let total_documents = collections.iter().map(|name| self.count(name)).sum();

        StoreHealth {
            connection_status,
            database: self.config.database.clone(),
            collections,
            total_documents,
        }
    }
}

// =============================================================================
// Store Health
// =============================================================================

/// Connectivity and content summary for introspection endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StoreHealth {
    pub connection_status: String,
    pub database: String,
    pub collections: Vec<String>,
    pub total_documents: usize,
}

// =============================================================================
// Tests
// =============================================================================
