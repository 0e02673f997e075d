//! CareHub Field Schemas
//!
//! Constraints for a single record field.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Anchored pattern for email-format fields: one `@`, dotted domain.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$";

// =============================================================================
// Field Kind
// =============================================================================

/// Kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    String,
    Email,
    Int,
    Float,
    StringArray,
}

impl FieldKind {
    fn matches(&self, value: &JsonValue) -> bool {
        match self {
            Self::String | Self::Email => value.is_string(),
            Self::Int => value.is_i64() || value.is_u64(),
            // An integer is an acceptable float, as in any JSON number model.
            Self::Float => value.is_number(),
            Self::StringArray => value
                .as_array()
                .map(|arr| arr.iter().all(|v| v.is_string()))
                .unwrap_or(false),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Email => "email",
            Self::Int => "int",
            Self::Float => "float",
            Self::StringArray => "string array",
        }
    }
}

// =============================================================================
// Field Schema
// =============================================================================

/// Constraints for a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Declarative default, recorded but never injected by the flows.
    pub default: Option<JsonValue>,
}

impl FieldSchema {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            min_length: None,
            max_length: None,
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn email() -> Self {
        Self::new(FieldKind::Email)
    }

    pub fn int() -> Self {
        Self::new(FieldKind::Int)
    }

    pub fn float() -> Self {
        Self::new(FieldKind::Float)
    }

    pub fn string_array() -> Self {
        Self::new(FieldKind::StringArray)
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn default_value(mut self, value: impl Into<JsonValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Validate a present, non-null value against this field schema.
    pub fn validate(&self, value: &JsonValue) -> Result<(), String> {
        if !self.kind.matches(value) {
            return Err(format!("expected {}", self.kind.name()));
        }

        if let Some(s) = value.as_str() {
            let chars = s.chars().count();
            if let Some(min) = self.min_length {
                if chars < min {
                    return Err(format!("length {} is less than minimum {}", chars, min));
                }
            }
            if let Some(max) = self.max_length {
                if chars > max {
                    return Err(format!("length {} is greater than maximum {}", chars, max));
                }
            }
            if self.kind == FieldKind::Email && !is_email(s) {
                return Err(format!("'{}' is not a valid email address", s));
            }
        }

        Ok(())
    }
}

fn is_email(s: &str) -> bool {
    regex::Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(s))
        .unwrap_or(false)
}

// =============================================================================
// Tests
// =============================================================================
