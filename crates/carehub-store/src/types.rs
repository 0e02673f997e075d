//! CareHub Store Types
//!
//! Core data types for document storage.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Document ID
// =============================================================================

/// Opaque identifier assigned to a document at creation time.
/// Unique within a collection and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// =============================================================================
// Document
// =============================================================================

/// A document in the store: a flat mapping from field name to JSON value.
/// The identity lives outside the field map and serializes as `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(flatten)]
    pub data: Map<String, JsonValue>,
}

impl Document {
    /// Create an empty document with a freshly assigned identity.
    pub fn new() -> Self {
        Self {
            id: DocumentId::generate(),
            data: Map::new(),
        }
    }

    /// Create an empty document with a specific identity.
    pub fn with_id(id: impl Into<DocumentId>) -> Self {
        Self {
            id: id.into(),
            data: Map::new(),
        }
    }

    /// Build a document from a field map. An `_id` string entry, if present,
    /// becomes the identity; otherwise one is generated.
    pub fn from_map(mut data: Map<String, JsonValue>) -> Self {
        let id = match data.remove("_id") {
            Some(JsonValue::String(s)) => DocumentId::new(s),
            _ => DocumentId::generate(),
        };
        Self { id, data }
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.data.get(key)
    }

    /// Set a field value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.data.insert(key.into(), value.into());
    }

    /// Check if a field exists.
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert to a JSON object including the `_id` field.
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::new();
        obj.insert("_id".to_string(), JsonValue::String(self.id.0.clone()));
        for (k, v) in &self.data {
            obj.insert(k.clone(), v.clone());
        }
        JsonValue::Object(obj)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_id() {
        let id1 = DocumentId::generate();
        let id2 = DocumentId::generate();
        assert_ne!(id1, id2);

        let id3 = DocumentId::new("custom-id");
        assert_eq!(id3.as_str(), "custom-id");
    }

    #[test]
    fn test_document_fields() {
        let mut doc = Document::new();
        doc.set("name", "Alice");
        doc.set("age", 30i64);

        assert_eq!(doc.get("name"), Some(&json!("Alice")));
        assert_eq!(doc.get("age"), Some(&json!(30)));
        assert!(doc.contains("name"));
        assert!(!doc.contains("email"));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_from_map_extracts_id() {
        let mut data = Map::new();
        data.insert("_id".to_string(), json!("doc123"));
        data.insert("name".to_string(), json!("Bob"));

        let doc = Document::from_map(data);
        assert_eq!(doc.id.as_str(), "doc123");
        assert_eq!(doc.get("name"), Some(&json!("Bob")));
        assert!(!doc.contains("_id"));
    }

    #[test]
    fn test_from_map_generates_id_when_absent() {
        let mut data = Map::new();
        data.insert("name".to_string(), json!("Carol"));

        let doc = Document::from_map(data);
        assert!(!doc.id.as_str().is_empty());
    }

    #[test]
    fn test_to_json_includes_id() {
        let mut doc = Document::with_id("test-doc");
        doc.set("count", 100i64);

        let json = doc.to_json();
        assert_eq!(json["_id"], "test-doc");
        assert_eq!(json["count"], 100);
    }
}
