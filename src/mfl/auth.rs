//! Login handshake against the MyFantasyLeague authentication endpoint.
//!
//! MFL exchanges a username/password pair for an opaque session token via
//! `POST {host}/{year}/login?USERNAME=...&PASSWORD=...&XML=1`. The response is
//! a small XML document, `<status MFL_USER_ID="...">OK</status>`; the
//! `MFL_USER_ID` attribute is the token attached to subsequent requests as a
//! cookie. This is the only exchange that does not speak JSON.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use chrono::Utc;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

use crate::core::filters::FilterList;
use crate::error::{MflError, Result};
use crate::mfl::config::CredentialStore;
use crate::mfl::types::TenantKey;

static SESSION_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"MFL_USER_ID="([^"]+)""#).expect("session token regex"));

/// Performs the login handshake and records the resulting session.
///
/// No retry lives here; a failed login surfaces immediately and retry policy
/// stays with the dispatcher or the caller.
#[derive(Debug, Clone)]
pub struct Authenticator {
    client: Client,
    store: Arc<CredentialStore>,
    host: String,
    timeout: Option<Duration>,
}

impl Authenticator {
    pub fn new(
        client: Client,
        store: Arc<CredentialStore>,
        host: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            client,
            store,
            host: host.into(),
            timeout,
        }
    }

    /// Exchange the tenant's credentials for a session token.
    ///
    /// On success the token and the current timestamp are written back to the
    /// store before the token is returned, so every later reader observes the
    /// same session. A timed-out or otherwise failed exchange writes nothing.
    pub async fn login(&self, key: &TenantKey) -> Result<String> {
        let config = self.store.get(key)?;

        let mut filters = FilterList::new();
        filters.push("USERNAME", &config.username);
        filters.push("PASSWORD", &config.password);
        filters.push("XML", 1);
        let url = filters.apply(&format!("{}/{}/login", self.host, key.year()))?;

        debug!(tenant = %key, "authenticating against {}", url.path());

        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::USER_AGENT, &config.user_agent);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|source| MflError::TransientAuth {
            year: key.year(),
            league_id: key.league_id().to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MflError::AuthRejected {
                year: key.year(),
                league_id: key.league_id().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| MflError::TransientAuth {
            year: key.year(),
            league_id: key.league_id().to_string(),
            source,
        })?;

        let token = SESSION_TOKEN_RE
            .captures(&body)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| MflError::AuthProtocol {
                status: status.as_u16(),
                body: body.clone(),
            })?;

        self.store.update_session(key, &token, Utc::now())?;
        debug!(tenant = %key, "session established");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_regex_extracts_token() {
        let body = r#"<status MFL_USER_ID="test_user_id=">OK</status>"#;

        let token = SESSION_TOKEN_RE
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        assert_eq!(token, Some("test_user_id="));
    }

    #[test]
    fn test_session_token_regex_rejects_tokenless_body() {
        let body = r#"<error>bad credentials</error>"#;
        assert!(SESSION_TOKEN_RE.captures(body).is_none());
    }
}
