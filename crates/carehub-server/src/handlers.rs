//! CareHub Request Handlers
//!
//! HTTP request handlers for the REST API: liveness, health, store
//! introspection, login-or-register, and profile creation.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use crate::flows;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

// =============================================================================
// Liveness & Health
// =============================================================================

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness marker.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "CareHub API is running".to_string(),
    })
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Store Introspection
// =============================================================================

/// Store connectivity report.
#[derive(Debug, Serialize)]
pub struct TestConnectionResponse {
    pub backend: String,
    pub database: String,
    pub connection_status: String,
    pub collections: Vec<String>,
    pub total_documents: usize,
    pub timestamp: String,
}

/// Report store connectivity and the collections currently present.
pub async fn test_connection(State(state): State<AppState>) -> Json<TestConnectionResponse> {
    let health = state.store.health();
    Json(TestConnectionResponse {
        backend: "embedded-document-store".to_string(),
        database: health.database,
        connection_status: health.connection_status,
        collections: health.collections,
        total_documents: health.total_documents,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

// =============================================================================
// Authentication
// =============================================================================

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Login-or-register endpoint.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    match flows::login_or_register(&state.store, &request.email, &request.password).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: outcome.message.to_string(),
                token: Some(outcome.token),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "login flow failed");
            (
                e.status_code(),
                Json(LoginResponse {
                    success: false,
                    message: e.to_string(),
                    token: None,
                }),
            )
        }
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Profile creation request body. Unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileCreateRequest {
    pub username: String,
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub disability_type: Option<String>,
    pub avatar_url: Option<String>,
    pub email: Option<String>,
}

impl ProfileCreateRequest {
    fn into_map(self) -> Map<String, JsonValue> {
        match serde_json::to_value(self) {
            Ok(JsonValue::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Profile creation response.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
}

/// Profile creation endpoint with username-uniqueness check.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileCreateRequest>,
) -> impl IntoResponse {
    match flows::create_profile(&state.store, request.into_map()).await {
        Ok(id) => (
            StatusCode::OK,
            Json(ProfileResponse {
                success: true,
                id: Some(id.to_string()),
                message: "Profile created".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "profile flow failed");
            (
                e.status_code(),
                Json(ProfileResponse {
                    success: false,
                    id: None,
                    message: e.to_string(),
                }),
            )
        }
    }
}

// =============================================================================
// Error Response
// =============================================================================

/// Generic error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString, code: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            code: code.to_string(),
        }
    }
}

/// Not found handler.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Not found", "NOT_FOUND")),
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_request_into_map_drops_nothing_set() {
        let request: ProfileCreateRequest = serde_json::from_value(json!({
            "username": "bob",
            "full_name": "Bob",
            "unknown_field": "ignored",
        }))
        .unwrap();

        let map = request.into_map();
        assert_eq!(map.get("username"), Some(&json!("bob")));
        assert_eq!(map.get("full_name"), Some(&json!("Bob")));
        assert!(!map.contains_key("unknown_field"));
        // Absent optional fields serialize as explicit nulls, as the
        // stored record carries them.
        assert_eq!(map.get("gender"), Some(&json!(null)));
    }
}
