//! Process-wide credential and session storage.
//!
//! One [`CredentialStore`] instance backs every dispatcher in the process.
//! It owns a [`TenantConfig`] per (year, league) tenant and hands out
//! per-tenant async locks so that session establishment is single-flight:
//! concurrent fetches that both miss the session cache serialize on the
//! tenant's lock instead of racing two logins.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::error::{MflError, Result};
use crate::mfl::types::{SessionCredential, TenantConfig, TenantKey};

/// Table of tenant credentials and cached sessions, keyed by [`TenantKey`].
///
/// All mutation goes through this interface; callers receive cloned
/// snapshots from [`get`](Self::get), never references into the table.
#[derive(Debug, Default)]
pub struct CredentialStore {
    configs: Mutex<HashMap<TenantKey, TenantConfig>>,
    // Held across the login round-trip, so these are async mutexes while
    // the tables themselves only ever lock briefly.
    auth_locks: Mutex<HashMap<TenantKey, Arc<tokio::sync::Mutex<()>>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite the configuration for a tenant.
    ///
    /// Re-registration replaces any cached session, forcing a fresh login on
    /// the next request for that tenant.
    pub fn register(
        &self,
        key: TenantKey,
        username: impl Into<String>,
        password: impl Into<String>,
        user_agent: impl Into<String>,
    ) {
        let config = TenantConfig::new(username, password, user_agent);
        self.configs.lock().unwrap().insert(key, config);
    }

    /// Snapshot of the tenant's configuration, session included.
    pub fn get(&self, key: &TenantKey) -> Result<TenantConfig> {
        self.configs
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| MflError::ConfigurationMissing {
                year: key.year(),
                league_id: key.league_id().to_string(),
            })
    }

    /// Store a freshly obtained session token for an already-registered tenant.
    pub fn update_session(
        &self,
        key: &TenantKey,
        token: impl Into<String>,
        obtained_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut configs = self.configs.lock().unwrap();
        let config = configs
            .get_mut(key)
            .ok_or_else(|| MflError::ConfigurationMissing {
                year: key.year(),
                league_id: key.league_id().to_string(),
            })?;
        config.session = Some(SessionCredential::new(token, obtained_at));
        Ok(())
    }

    /// Drop the cached session, but only if it still holds `stale_token`.
    ///
    /// The compare step keeps a slow fetch that saw a 401 on an old token
    /// from wiping out the fresh token a concurrent login just installed.
    pub fn invalidate_session(&self, key: &TenantKey, stale_token: &str) -> Result<()> {
        let mut configs = self.configs.lock().unwrap();
        let config = configs
            .get_mut(key)
            .ok_or_else(|| MflError::ConfigurationMissing {
                year: key.year(),
                league_id: key.league_id().to_string(),
            })?;
        if config
            .session
            .as_ref()
            .is_some_and(|s| s.token == stale_token)
        {
            config.session = None;
        }
        Ok(())
    }

    /// The tenant's session-establishment lock.
    ///
    /// Lazily created; distinct tenants get distinct locks so their logins
    /// never block one another.
    pub(crate) fn auth_lock(&self, key: &TenantKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.auth_locks.lock().unwrap();
        locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}
