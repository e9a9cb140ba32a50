//! Tenant and session types for the MyFantasyLeague API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one isolated credential scope: a league within a season.
///
/// MyFantasyLeague sessions are scoped per (year, league); every request
/// carries a key so the client knows which cached session to attach.
///
/// # Examples
///
/// ```rust
/// use mfl_api::TenantKey;
///
/// let key = TenantKey::new(2020, "12345");
/// assert_eq!(key.year(), 2020);
/// assert_eq!(key.league_id(), "12345");
/// assert_eq!(key.to_string(), "2020/12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantKey {
    year: u16,
    league_id: String,
}

impl TenantKey {
    pub fn new(year: u16, league_id: impl Into<String>) -> Self {
        Self {
            year,
            league_id: league_id.into(),
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn league_id(&self) -> &str {
        &self.league_id
    }
}

impl fmt::Display for TenantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.league_id)
    }
}

/// Session token obtained from the login handshake, scoped to one tenant.
///
/// Opaque to the client; it is echoed back to the service as the
/// `MFL_USER_ID` cookie until replaced by a re-authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredential {
    pub token: String,
    pub obtained_at: DateTime<Utc>,
}

impl SessionCredential {
    pub fn new(token: impl Into<String>, obtained_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            obtained_at,
        }
    }
}

/// Per-tenant configuration held by the credential store.
///
/// `user_agent` is the client name registered with MyFantasyLeague; the
/// service expects it on every request from that tenant. `session` stays
/// empty until the first successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantConfig {
    pub username: String,
    pub password: String,
    pub user_agent: String,
    pub session: Option<SessionCredential>,
}

impl TenantConfig {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            user_agent: user_agent.into(),
            session: None,
        }
    }
}
