//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_DISCOVER_TIMEOUT_SECS, DEFAULT_UNSPLASH_API_URL};
use crate::{FeedError, FeedResult};
use std::time::Duration;

/// Settings for the discovery adapter.
///
/// The access key is optional: without one the adapter reports `NotConfigured` on every fetch
/// instead of calling upstream.
#[derive(Clone)]
pub struct DiscoveryConfig {
    base_url: String,
    access_key: Option<String>,
    timeout: Duration,
}

impl DiscoveryConfig {
    /// Create a new `DiscoveryConfig`.
    ///
    /// A blank access key is treated as absent. A trailing `/` on the base URL is dropped.
    pub fn new(
        base_url: impl Into<String>,
        access_key: Option<String>,
        timeout: Duration,
    ) -> FeedResult<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(FeedError::InvalidConfig(
                "upstream base URL cannot be empty".into(),
            ));
        }
        if timeout.is_zero() {
            return Err(FeedError::InvalidConfig(
                "upstream timeout must be greater than zero".into(),
            ));
        }

        let access_key = access_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            base_url,
            access_key,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }
}

// Keeps the access key out of logs.
impl std::fmt::Debug for DiscoveryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryConfig")
            .field("base_url", &self.base_url)
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Build a `DiscoveryConfig` from raw optional environment values.
///
/// Missing or blank values fall back to the defaults. The timeout must parse as a positive
/// number of seconds.
pub fn discovery_config_from_env_values(
    base_url: Option<String>,
    access_key: Option<String>,
    timeout_secs: Option<String>,
) -> FeedResult<DiscoveryConfig> {
    let base_url = base_url
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_UNSPLASH_API_URL.to_string());

    let timeout_secs = match timeout_secs
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            FeedError::InvalidConfig(format!(
                "DISCOVER_TIMEOUT_SECS must be a positive integer, got {raw:?}"
            ))
        })?,
        None => DEFAULT_DISCOVER_TIMEOUT_SECS,
    };

    DiscoveryConfig::new(base_url, access_key, Duration::from_secs(timeout_secs))
}
