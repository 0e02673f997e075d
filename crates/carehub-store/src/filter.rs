//! CareHub Store Filter
//!
//! Equality-only document filtering. Range, regex, and sort semantics are
//! not part of the store contract.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::types::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// =============================================================================
// Filter
// =============================================================================

/// A conjunction of field-equality conditions. An empty filter matches
/// every document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filter {
    conditions: Vec<(String, JsonValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a field to equal the given value.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Check if a document satisfies every condition.
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_all() {
        let mut doc = Document::new();
        doc.set("name", "Alice");

        assert!(Filter::new().matches(&doc));
        assert!(Filter::new().matches(&Document::new()));
    }

    #[test]
    fn test_single_condition() {
        let mut doc = Document::new();
        doc.set("email", "a@x.com");

        assert!(Filter::new().eq("email", "a@x.com").matches(&doc));
        assert!(!Filter::new().eq("email", "b@x.com").matches(&doc));
        assert!(!Filter::new().eq("username", "a").matches(&doc));
    }

    #[test]
    fn test_conjunction() {
        let mut doc = Document::new();
        doc.set("username", "bob");
        doc.set("active", true);

        let filter = Filter::new().eq("username", "bob").eq("active", true);
        assert!(filter.matches(&doc));

        let filter = Filter::new().eq("username", "bob").eq("active", false);
        assert!(!filter.matches(&doc));
    }
}
