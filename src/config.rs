//! Client configuration.
//!
//! The catalog backend address comes from the environment with a localhost
//! fallback, matching how the backend is run during development.

use std::time::Duration;

/// Default catalog API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "ARMORY_API_URL";

/// Configuration for the catalog client and application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog API (no trailing slash)
    pub base_url: String,
    /// Per-request timeout for the HTTP client
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is stripped so request
    /// paths can be joined with a plain `format!`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(ENV_API_URL) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }
}
