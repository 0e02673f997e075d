//! CareHub Schema Catalog
//!
//! One record schema per collection. Collection name is the lowercased
//! record name; the schemas declare shape only and attach no behavior.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::field::FieldSchema;
use crate::record::RecordSchema;

/// Every collection the service knows about.
pub const COLLECTIONS: [&str; 12] = [
    "user",
    "profile",
    "provider",
    "appointment",
    "medicalrecord",
    "post",
    "group",
    "program",
    "application",
    "product",
    "vendor",
    "review",
];

/// List all declared collection names.
pub fn collections() -> &'static [&'static str] {
    &COLLECTIONS
}

/// Look up the record schema for a collection name.
pub fn schema_for(collection: &str) -> Option<RecordSchema> {
    match collection {
        "user" => Some(user()),
        "profile" => Some(profile()),
        "provider" => Some(provider()),
        "appointment" => Some(appointment()),
        "medicalrecord" => Some(medical_record()),
        "post" => Some(post()),
        "group" => Some(group()),
        "program" => Some(program()),
        "application" => Some(application()),
        "product" => Some(product()),
        "vendor" => Some(vendor()),
        "review" => Some(review()),
        _ => None,
    }
}

/// Account record. Email uniqueness is a flow-level convention, not a
/// store-level constraint.
pub fn user() -> RecordSchema {
    RecordSchema::builder("user")
        .required_field("email", FieldSchema::email())
        .field("full_name", FieldSchema::string())
        .field("username", FieldSchema::string().min_length(3).max_length(20))
        .field("avatar_url", FieldSchema::string())
        .field("created_at", FieldSchema::string())
        .build()
}

/// Member profile. Username uniqueness is enforced by the profile flow.
pub fn profile() -> RecordSchema {
    RecordSchema::builder("profile")
        .required_field("username", FieldSchema::string().min_length(3).max_length(20))
        .field("full_name", FieldSchema::string())
        .field("gender", FieldSchema::string())
        .field("date_of_birth", FieldSchema::string())
        .field("disability_type", FieldSchema::string())
        .field("avatar_url", FieldSchema::string())
        .field("email", FieldSchema::email())
        .field("created_at", FieldSchema::string())
        .build()
}

/// Care provider.
pub fn provider() -> RecordSchema {
    RecordSchema::builder("provider")
        .required_field("name", FieldSchema::string())
        .field("specialty", FieldSchema::string())
        .field("rating", FieldSchema::float())
        .field("location", FieldSchema::string())
        .field("images", FieldSchema::string_array())
        .build()
}

/// Appointment between a user and a provider. The referenced ids are
/// advisory fields; no relational integrity is enforced.
pub fn appointment() -> RecordSchema {
    RecordSchema::builder("appointment")
        .required_field("user_id", FieldSchema::string())
        .required_field("provider_id", FieldSchema::string())
        .required_field("scheduled_for", FieldSchema::string())
        .field("notes", FieldSchema::string())
        .build()
}

/// Medical record entry.
pub fn medical_record() -> RecordSchema {
    RecordSchema::builder("medicalrecord")
        .required_field("user_id", FieldSchema::string())
        .required_field("title", FieldSchema::string())
        .field("provider_id", FieldSchema::string())
        .field("description", FieldSchema::string())
        .build()
}

/// Community post.
pub fn post() -> RecordSchema {
    RecordSchema::builder("post")
        .required_field("user_id", FieldSchema::string())
        .required_field("content", FieldSchema::string())
        .field("images", FieldSchema::string_array())
        .build()
}

/// Community group.
pub fn group() -> RecordSchema {
    RecordSchema::builder("group")
        .required_field("name", FieldSchema::string())
        .field("description", FieldSchema::string())
        .build()
}

/// Support program.
pub fn program() -> RecordSchema {
    RecordSchema::builder("program")
        .required_field("title", FieldSchema::string())
        .field("category", FieldSchema::string())
        .field("eligibility", FieldSchema::string())
        .build()
}

/// Program application.
pub fn application() -> RecordSchema {
    RecordSchema::builder("application")
        .required_field("user_id", FieldSchema::string())
        .required_field("program_id", FieldSchema::string())
        .field("status", FieldSchema::string().default_value("draft"))
        .build()
}

/// Marketplace product.
pub fn product() -> RecordSchema {
    RecordSchema::builder("product")
        .required_field("name", FieldSchema::string())
        .field("category", FieldSchema::string())
        .field("price", FieldSchema::float())
        .field("vendor_id", FieldSchema::string())
        .build()
}

/// Marketplace vendor.
pub fn vendor() -> RecordSchema {
    RecordSchema::builder("vendor")
        .required_field("name", FieldSchema::string())
        .field("rating", FieldSchema::float())
        .build()
}

/// Product review.
pub fn review() -> RecordSchema {
    RecordSchema::builder("review")
        .required_field("user_id", FieldSchema::string())
        .required_field("product_id", FieldSchema::string())
        .required_field("rating", FieldSchema::int())
        .field("comment", FieldSchema::string())
        .build()
}

// =============================================================================
// Tests
// =============================================================================
