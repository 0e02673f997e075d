//! CareHub Request Flows
//!
//! The two composed read-then-conditional-write operations over the document
//! store: login-or-register and profile creation with a username-uniqueness
//! check. Callers treat each flow as one logical unit, but the existence
//! check and the subsequent create are separate store calls: two concurrent
//! invocations with the same email or username can both pass the check
//! before either writes.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::error::FlowError;
use carehub_schema::catalog;
use carehub_store::{Document, DocumentId, DocumentStore, Filter};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value as JsonValue};

/// Collection holding account records.
pub const USER_COLLECTION: &str = "user";

/// Collection holding member profiles.
pub const PROFILE_COLLECTION: &str = "profile";

/// Stand-in session token. There is no token lifecycle.
const PLACEHOLDER_TOKEN: &str = "demo-token";

// =============================================================================
// Login-or-Register
// =============================================================================

/// Outcome of the login-or-register flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Whether a new account document was created.
    pub created: bool,
    pub message: &'static str,
    pub token: String,
}

/// Treat login and first-time registration as one operation: a known email
/// logs in, an unknown email registers a minimal account document. The
/// password is accepted unconditionally and never stored; every
/// syntactically valid email yields a success outcome.
pub async fn login_or_register(
    store: &DocumentStore,
    email: &str,
    _password: &str,
) -> Result<LoginOutcome, FlowError> {
    let mut data = Map::new();
    data.insert("email".to_string(), JsonValue::String(email.to_string()));
    catalog::user().validate(&data).map_err(FlowError::Validation)?;

    let filter = Filter::new().eq("email", email);
    let existing = store.query(USER_COLLECTION, &filter, Some(1)).await?;
    if !existing.is_empty() {
        tracing::info!(email, "existing account logged in");
        return Ok(LoginOutcome {
            created: false,
            message: "Login successful",
            token: PLACEHOLDER_TOKEN.to_string(),
        });
    }

    data.insert(
        "created_at".to_string(),
        JsonValue::String(utc_timestamp()),
    );
    let id = store.create(USER_COLLECTION, Document::from_map(data)).await?;
    tracing::info!(email, id = %id, "registered new account");

    Ok(LoginOutcome {
        created: true,
        message: "Account created and logged in",
        token: PLACEHOLDER_TOKEN.to_string(),
    })
}

// =============================================================================
// Create Profile
// =============================================================================

/// Create a profile after checking that no existing profile carries the same
/// username. Uniqueness is enforced here; the store itself has no unique
/// constraint.
pub async fn create_profile(
    store: &DocumentStore,
    mut data: Map<String, JsonValue>,
) -> Result<DocumentId, FlowError> {
    catalog::profile()
        .validate(&data)
        .map_err(FlowError::Validation)?;

    // Validation guarantees a string username.
    let username = data
        .get("username")
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_string();

    let filter = Filter::new().eq("username", username.as_str());
    let existing = store.query(PROFILE_COLLECTION, &filter, Some(1)).await?;
    if !existing.is_empty() {
        return Err(FlowError::Conflict("Username already taken".to_string()));
    }

    data.insert(
        "created_at".to_string(),
        JsonValue::String(utc_timestamp()),
    );
    let id = store
        .create(PROFILE_COLLECTION, Document::from_map(data))
        .await?;
    tracing::info!(username = %username, id = %id, "created profile");

    Ok(id)
}

/// ISO-8601 UTC timestamp with millisecond precision and a trailing `Z`.
fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use carehub_store::{StoreConfig, StoreError};
    use serde_json::json;

    fn live_store() -> DocumentStore {
        DocumentStore::connect(StoreConfig::default())
    }

    fn profile_payload(username: &str) -> Map<String, JsonValue> {
        let mut data = Map::new();
        data.insert("username".to_string(), json!(username));
        data.insert("full_name".to_string(), json!("Bob"));
        data
    }

    #[tokio::test]
    async fn test_first_login_registers() {
        let store = live_store();

        let outcome = login_or_register(&store, "a@x.com", "secret").await.unwrap();
        assert!(outcome.created);
        assert_eq!(outcome.message, "Account created and logged in");
        assert_eq!(outcome.token, "demo-token");
        assert_eq!(store.count(USER_COLLECTION), 1);

        let docs = store
            .query(USER_COLLECTION, &Filter::new().eq("email", "a@x.com"), Some(1))
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        let created_at = docs[0].get("created_at").and_then(|v| v.as_str()).unwrap();
        assert!(created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    }

    #[tokio::test]
    async fn test_second_login_is_idempotent() {
        let store = live_store();

        let first = login_or_register(&store, "a@x.com", "secret").await.unwrap();
        let second = login_or_register(&store, "a@x.com", "different").await.unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(second.message, "Login successful");
        assert_eq!(store.count(USER_COLLECTION), 1);
    }

    #[tokio::test]
    async fn test_malformed_email_never_reaches_store() {
        // An unavailable store would turn any access into a store error, so a
        // validation error here proves the flow stopped first.
        let store = DocumentStore::unavailable("connection refused");

        let err = login_or_register(&store, "not-an-email", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = DocumentStore::unavailable("connection refused");

        let err = login_or_register(&store, "a@x.com", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Store(StoreError::Unavailable(_))));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_create_profile_roundtrip() {
        let store = live_store();

        let id = create_profile(&store, profile_payload("bob")).await.unwrap();

        let docs = store
            .query(PROFILE_COLLECTION, &Filter::new().eq("username", "bob"), Some(1))
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, id);
        assert_eq!(docs[0].get("full_name"), Some(&json!("Bob")));
        assert!(docs[0].contains("created_at"));
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = live_store();

        create_profile(&store, profile_payload("bob")).await.unwrap();
        let err = create_profile(&store, profile_payload("bob"))
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Conflict(_)));
        assert!(err.to_string().contains("already taken"));
        assert_eq!(store.count(PROFILE_COLLECTION), 1);
    }

    #[tokio::test]
    async fn test_short_username_never_reaches_store() {
        let store = DocumentStore::unavailable("connection refused");

        let err = create_profile(&store, profile_payload("ab")).await.unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = utc_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(ts.contains('T'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
