//! Configuration management for the flight board Lambda.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default AviationStack endpoint. The free plan only serves plain HTTP.
pub const DEFAULT_BASE_URL: &str = "http://api.aviationstack.com";

/// Default timeout for the upstream call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// AviationStack access key. Checked per request, so a missing key is
    /// reported to the caller instead of failing the cold start.
    pub api_key: Option<String>,
    /// Base URL of the flight data provider
    pub base_url: String,
    /// Timeout for the upstream call
    pub timeout: Duration,
    /// Pass the raw upstream error text through to clients
    pub expose_upstream_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            expose_upstream_errors: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Never fails: a malformed optional setting is logged and replaced by its
    /// default.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var("AVIATIONSTACK_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url = var("AVIATIONSTACK_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match var("AVIATIONSTACK_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    warn!(
                        "AVIATIONSTACK_TIMEOUT_SECS must be positive, using {}",
                        DEFAULT_TIMEOUT_SECS
                    );
                    DEFAULT_TIMEOUT_SECS
                }
                Err(e) => {
                    warn!(
                        "Invalid AVIATIONSTACK_TIMEOUT_SECS '{}' ({}), using {}",
                        raw, e, DEFAULT_TIMEOUT_SECS
                    );
                    DEFAULT_TIMEOUT_SECS
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let expose_upstream_errors = match var("FLIGHTS_EXPOSE_UPSTREAM_ERRORS") {
            Some(raw) => match raw.trim().to_ascii_lowercase().parse::<bool>() {
                Ok(flag) => flag,
                Err(e) => {
                    warn!(
                        "Invalid FLIGHTS_EXPOSE_UPSTREAM_ERRORS '{}' ({}), using true",
                        raw, e
                    );
                    true
                }
            },
            None => true,
        };

        Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            expose_upstream_errors,
        }
    }
}
