//! CareHub Store Collection
//!
//! A named, unordered bag of documents guarded for concurrent access.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::error::StoreError;
use crate::filter::Filter;
use crate::types::{Document, DocumentId};
use parking_lot::RwLock;
use std::collections::HashMap;

// =============================================================================
// Collection
// =============================================================================

/// A collection of documents. Documents are only ever inserted; this store
/// has no update or delete operations.
pub struct Collection {
    name: String,
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl Collection {
    /// Create a new, empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Get the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a document, returning its identity.
    pub fn insert(&self, doc: Document) -> Result<DocumentId, StoreError> {
        let id = doc.id.clone();
        let mut docs = self.documents.write();
        if docs.contains_key(&id) {
            return Err(StoreError::WriteRejected(format!(
                "document with id {} already exists in collection '{}'",
                id, self.name
            )));
        }
        docs.insert(id.clone(), doc);
        Ok(id)
    }

    /// Get a document by identity.
    pub fn get(&self, id: &DocumentId) -> Option<Document> {
        self.documents.read().get(id).cloned()
    }

    /// Find up to `limit` documents matching the filter.
    pub fn find(&self, filter: &Filter, limit: usize) -> Vec<Document> {
        self.documents
            .read()
            .values()
            .filter(|doc| filter.matches(doc))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Get the number of documents.
    pub fn count(&self) -> usize {
        self.documents.read().len()
    }
}

// =============================================================================
// Tests
// =============================================================================
