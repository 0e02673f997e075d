//! CareHub Record Schemas
//!
//! A record schema names one collection and declares its field constraints.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::field::FieldSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

// =============================================================================
// Record Schema
// =============================================================================

/// Declarative shape of one collection's records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Collection this shape belongs to.
    pub collection: String,
    pub fields: HashMap<String, FieldSchema>,
    pub required: Vec<String>,
}

impl RecordSchema {
    pub fn builder(collection: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder {
            schema: RecordSchema {
                collection: collection.into(),
                fields: HashMap::new(),
                required: Vec::new(),
            },
        }
    }

    /// Validate a field map against this schema. Returns every violation,
    /// not just the first. Absent and null optional fields are accepted;
    /// fields outside the declared shape are ignored.
    pub fn validate(&self, data: &Map<String, JsonValue>) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for required in &self.required {
            if data.get(required).map_or(true, JsonValue::is_null) {
                errors.push(format!("Missing required field: {}", required));
            }
        }

        for (name, field) in &self.fields {
            if let Some(value) = data.get(name) {
                if value.is_null() {
                    continue;
                }
                if let Err(err) = field.validate(value) {
                    errors.push(format!("Field '{}': {}", name, err));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// =============================================================================
// Record Schema Builder
// =============================================================================

/// Builder for record schemas.
pub struct RecordSchemaBuilder {
    schema: RecordSchema,
}

impl RecordSchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        self.schema.fields.insert(name.into(), field);
        self
    }

    pub fn required_field(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        let name = name.into();
        self.schema.fields.insert(name.clone(), field);
        self.schema.required.push(name);
        self
    }

    pub fn build(self) -> RecordSchema {
        self.schema
    }
}

// =============================================================================
// Tests
// =============================================================================
