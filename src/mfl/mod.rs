//! MyFantasyLeague service layer: credentials, login, request dispatch,
//! and the report endpoint builders.

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod http;
pub mod types;

// Re-export commonly used items for convenience
pub use auth::Authenticator;
pub use config::CredentialStore;
pub use http::{RequestDispatcher, MFL_API_HOST};
pub use types::{SessionCredential, TenantConfig, TenantKey};
