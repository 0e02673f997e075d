//! CareHub Schema - Declarative Record Shapes
//!
//! One record schema per collection, each a passive declaration of field
//! constraints (required/optional, length bounds, email format). No behavior
//! is attached; the request flows consume these for validation only.
//!
//! @version 0.1.0
//! @author CareHub Development Team

pub mod catalog;
pub mod field;
pub mod record;

pub use catalog::{collections, schema_for};
pub use field::{FieldKind, FieldSchema};
pub use record::{RecordSchema, RecordSchemaBuilder};
