//! MyFantasyLeague API Client Library
//!
//! An async Rust client for the MyFantasyLeague.com export API, handling
//! per-league session management, authenticated request dispatch, and the
//! ordered query-filter construction every report endpoint shares.
//!
//! ## Features
//!
//! - **Per-tenant sessions**: credentials and session tokens are scoped to a
//!   (year, league) pair and cached for the process lifetime
//! - **Single-flight login**: concurrent requests for an unauthenticated
//!   tenant trigger exactly one login round-trip
//! - **Stale-session recovery**: a rejected token is replaced once and the
//!   request retried once before the failure surfaces
//! - **Report endpoints**: player database, profiles, rules, rankings,
//!   roster status and transaction reports as plain async functions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mfl_api::{CredentialStore, RequestDispatcher, TenantKey};
//! use mfl_api::mfl::endpoints::{get_players, PlayersQuery};
//!
//! # async fn example() -> mfl_api::Result<()> {
//! let store = Arc::new(CredentialStore::new());
//! let key = TenantKey::new(2020, "12345");
//! store.register(key.clone(), "username", "password", "my-client-name");
//!
//! let dispatcher = RequestDispatcher::new(Arc::clone(&store))?;
//! let players = get_players(&dispatcher, &key, &PlayersQuery::default()).await?;
//! println!("{players}");
//! # Ok(())
//! # }
//! ```
//!
//! Register every tenant before fetching for it; an unregistered tenant
//! fails with [`MflError::ConfigurationMissing`] before any network call.

pub mod core;
pub mod error;
pub mod mfl;

// Re-export commonly used types
pub use crate::core::filters::FilterList;
pub use error::{MflError, Result};
pub use mfl::{
    Authenticator, CredentialStore, RequestDispatcher, SessionCredential, TenantConfig, TenantKey,
    MFL_API_HOST,
};
