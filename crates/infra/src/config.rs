//! API client configuration
//!
//! Loaded environment-first with local-development defaults.
//!
//! ## Environment Variables
//! - `REPORTDECK_API_URL`: Base URL of the backend API
//!   (default `http://localhost:8080/api`)
//! - `REPORTDECK_API_TIMEOUT_SECS`: Request timeout in seconds (default 30)

use std::time::Duration;

use reportdeck_domain::{ReportdeckError, Result};
use tracing::debug;

/// Default backend location for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the API facades
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL the fixed service paths (`/auth`, `/audit-logs`,
    /// `/domains`) are appended to; no trailing slash.
    pub base_url: String,
    /// Timeout for each request
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Build a config for the given base URL, trimming a trailing slash
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string(), ..Self::default() }
    }

    /// Load from environment variables, falling back to defaults
    ///
    /// # Errors
    /// Returns `ReportdeckError::Config` if `REPORTDECK_API_TIMEOUT_SECS`
    /// is present but not a valid integer.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("REPORTDECK_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match std::env::var("REPORTDECK_API_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|e| {
                ReportdeckError::Config(format!("Invalid API timeout: {e}"))
            })?),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        debug!(base_url = %base_url, timeout_secs = timeout.as_secs(), "API config loaded");
        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn new_trims_trailing_slash() {
        let config = ApiConfig::new("https://api.example.org/api/");
        assert_eq!(config.base_url, "https://api.example.org/api");
    }
}
