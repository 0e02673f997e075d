//! CareHub Server - HTTP Surface
//!
//! Maps the request flows to HTTP endpoints: login-or-register, profile
//! creation with a username-uniqueness check, and store introspection.
//! Internal failures are mapped to status codes at this boundary.
//!
//! @version 0.1.0
//! @author CareHub Development Team

pub mod config;
pub mod error;
pub mod flows;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::FlowError;
pub use flows::{LoginOutcome, PROFILE_COLLECTION, USER_COLLECTION};
pub use router::create_router;
pub use state::AppState;
