//! Sync layer configuration.
//!
//! Store credentials come from the process environment. Missing credentials
//! (or the placeholder key shipped in sample env files) leave the store
//! unconfigured, which puts the whole layer in local-only mode.

use crate::policy::WritePolicies;
use std::path::PathBuf;

/// Environment variable holding the store API key.
pub const ENV_API_KEY: &str = "AUREXIS_STORE_API_KEY";
/// Environment variable holding the store project id.
pub const ENV_PROJECT_ID: &str = "AUREXIS_STORE_PROJECT_ID";
/// Environment variable holding the store auth domain.
pub const ENV_AUTH_DOMAIN: &str = "AUREXIS_STORE_AUTH_DOMAIN";
/// Environment variable toggling the store's offline cache.
pub const ENV_ENABLE_PERSISTENCE: &str = "AUREXIS_STORE_ENABLE_PERSISTENCE";
/// Environment variable pointing at the local state file.
pub const ENV_LOCAL_STATE_PATH: &str = "AUREXIS_LOCAL_STATE_PATH";

/// API key value that marks a sample configuration.
pub const PLACEHOLDER_API_KEY: &str = "demo-api-key";

/// Credentials for connecting to the remote document store.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoreCredentials {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub auth_domain: Option<String>,
}

impl StoreCredentials {
    /// Reads credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through an arbitrary lookup. Blank values count as
    /// missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            api_key: read(ENV_API_KEY),
            project_id: read(ENV_PROJECT_ID),
            auth_domain: read(ENV_AUTH_DOMAIN),
        }
    }

    /// Whether these credentials identify a real store.
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.api_key, &self.project_id),
            (Some(key), Some(_)) if key != PLACEHOLDER_API_KEY
        )
    }
}

impl std::fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("project_id", &self.project_id)
            .field("auth_domain", &self.auth_domain)
            .finish()
    }
}

/// Configuration for the sync layer.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Remote store credentials.
    pub credentials: StoreCredentials,
    /// Ask the store adapter to keep an offline cache.
    pub enable_persistence: bool,
    /// Write policy per entity group.
    pub policies: WritePolicies,
    /// File backing local browser-style state. `None` keeps it in memory.
    pub local_state_path: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            credentials: StoreCredentials::default(),
            enable_persistence: true,
            policies: WritePolicies::default(),
            local_state_path: None,
        }
    }
}

impl SyncConfig {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration through an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enable_persistence = lookup(ENV_ENABLE_PERSISTENCE)
            .map(|v| !v.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        let local_state_path = lookup(ENV_LOCAL_STATE_PATH)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self {
            credentials: StoreCredentials::from_lookup(&lookup),
            enable_persistence,
            policies: WritePolicies::default(),
            local_state_path,
        }
    }
}
