//! Request dispatch with cached-session handling.
//!
//! [`RequestDispatcher`] is the single entry point every report endpoint goes
//! through. It guarantees, per tenant: a registered configuration exists,
//! a session token is established at most once concurrently, the token rides
//! on every outgoing request, and a token the service has started rejecting
//! is replaced exactly once before the failure is surfaced.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{COOKIE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{MflError, Result};
use crate::mfl::auth::Authenticator;
use crate::mfl::config::CredentialStore;
use crate::mfl::types::TenantKey;

/// Base host for the MyFantasyLeague API.
pub const MFL_API_HOST: &str = "https://api.myfantasyleague.com";

/// Route for all report requests: `{host}/{year}/export`.
pub const EXPORT_ROUTE: &str = "export";

fn stale_session_status(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Issues authenticated GET requests for report data.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use mfl_api::{CredentialStore, RequestDispatcher, TenantKey};
///
/// # async fn example() -> mfl_api::Result<()> {
/// let store = Arc::new(CredentialStore::new());
/// let key = TenantKey::new(2020, "12345");
/// store.register(key.clone(), "username", "password", "my-client");
///
/// let dispatcher = RequestDispatcher::new(Arc::clone(&store))?;
/// let url = url::Url::parse(&format!("{}?TYPE=allRules&JSON=1", dispatcher.export_url(2020)))?;
/// let rules = dispatcher.fetch(url, &key).await?;
/// println!("{rules}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    client: Client,
    store: Arc<CredentialStore>,
    authenticator: Authenticator,
    host: String,
    timeout: Option<Duration>,
}

impl RequestDispatcher {
    /// Dispatcher against the production MFL host with no request timeout.
    pub fn new(store: Arc<CredentialStore>) -> Result<Self> {
        Self::with_host(store, MFL_API_HOST)
    }

    /// Dispatcher against an alternate host (league mirrors, mock servers).
    pub fn with_host(store: Arc<CredentialStore>, host: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        let host = host.into();
        let authenticator = Authenticator::new(client.clone(), Arc::clone(&store), &host, None);
        Ok(Self {
            client,
            store,
            authenticator,
            host,
            timeout: None,
        })
    }

    /// Apply a per-request timeout to every HTTP call, login included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self.authenticator = Authenticator::new(
            self.client.clone(),
            Arc::clone(&self.store),
            &self.host,
            Some(timeout),
        );
        self
    }

    /// Base export URL for a season: `{host}/{year}/export`.
    pub fn export_url(&self, year: u16) -> String {
        format!("{}/{}/{}", self.host, year, EXPORT_ROUTE)
    }

    /// Fetch a report URL on behalf of a tenant.
    ///
    /// Establishes a session on first use, reuses it afterwards, and on a
    /// 401/403 replaces it exactly once before retrying the GET exactly once.
    pub async fn fetch(&self, url: Url, key: &TenantKey) -> Result<Value> {
        // Fails before any network traffic when the tenant was never registered.
        let config = self.store.get(key)?;

        let token = match config.session {
            Some(session) => session.token,
            None => self.ensure_session(key).await?,
        };

        let response = self.send(url.clone(), key, &token).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        if stale_session_status(status) {
            warn!(tenant = %key, %status, "cached session rejected, re-authenticating once");
            self.store.invalidate_session(key, &token)?;
            let token = self.ensure_session(key).await?;

            let retry = self.send(url.clone(), key, &token).await?;
            let retry_status = retry.status();
            if retry_status.is_success() {
                return Ok(retry.json::<Value>().await?);
            }
            if stale_session_status(retry_status) {
                return Err(MflError::AuthRejected {
                    year: key.year(),
                    league_id: key.league_id().to_string(),
                    status: retry_status.as_u16(),
                });
            }
            return Self::remote_failure(url, retry).await;
        }

        Self::remote_failure(url, response).await
    }

    /// Session token for the tenant, logging in if none is cached.
    ///
    /// Single-flight per tenant: waiters queue on the tenant's auth lock and
    /// re-check the store before logging in, so concurrent cache misses
    /// produce one login round-trip and everyone observes its token.
    async fn ensure_session(&self, key: &TenantKey) -> Result<String> {
        let lock = self.store.auth_lock(key);
        let _guard = lock.lock().await;

        if let Some(session) = self.store.get(key)?.session {
            debug!(tenant = %key, "session established by concurrent login");
            return Ok(session.token);
        }

        self.authenticator.login(key).await
    }

    /// Perform one authenticated GET. A request that never completes
    /// (timeout, connection failure) surfaces as `RemoteRequestFailed` with
    /// no status, keeping data-call failures inside the taxonomy rather than
    /// leaking raw transport errors.
    async fn send(
        &self,
        url: Url,
        key: &TenantKey,
        token: &str,
    ) -> Result<reqwest::Response> {
        let config = self.store.get(key)?;
        let mut request = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &config.user_agent)
            .header(COOKIE, format!("MFL_USER_ID={token}"));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
            .send()
            .await
            .map_err(|source| MflError::RemoteRequestFailed {
                url: url.to_string(),
                status: source.status().map(|s| s.as_u16()),
                body: source.to_string(),
            })
    }

    async fn remote_failure(url: Url, response: reqwest::Response) -> Result<Value> {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(MflError::RemoteRequestFailed {
            url: url.to_string(),
            status: Some(status),
            body,
        })
    }
}
