//! Abhivyakti festival client
//!
//! Typed client for the Abhivyakti college cultural-festival backend:
//! credentialed API transport, auth/session handling, event registration,
//! team formation and management, and passes/accommodation purchase with
//! hosted-checkout redirect URLs. All business rules (capacity accounting,
//! payment settlement, token issuance) live server-side; this crate is the
//! orchestration layer in front of them.

pub mod api;
pub mod config;
pub mod flows;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AbhivyaktiError, Result};

// Re-export main components for easy access
pub use api::ApiClient;
pub use services::ServiceFactory;
pub use state::{InFlightRegistry, RegistrationFlow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
