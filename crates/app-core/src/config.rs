//! Application configuration
//!
//! This module provides the service URL table consumed by the data-fetching
//! layer. Configuration is constructed from a base service URL, loaded from
//! a JSON document, or picked up from the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default base URL for the people services
const DEFAULT_SERVICE_BASE: &str = "https://api.meridian.internal/people/v1";

/// Environment variable overriding the service base URL
const ENV_SERVICE_BASE: &str = "MERIDIAN_SERVICE_BASE";

/// Environment variable overriding the user-info endpoint directly
const ENV_USER_INFO_URL: &str = "MERIDIAN_USER_INFO_URL";

/// Addresses of the backend services the shell talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUrls {
    /// Current-user profile endpoint
    pub user_info: String,
}

impl ServiceUrls {
    /// Build the URL table from a service base URL
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            user_info: format!("{}/user-info", base),
        }
    }
}

impl Default for ServiceUrls {
    fn default() -> Self {
        Self::from_base(DEFAULT_SERVICE_BASE)
    }
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Backend service URL table
    #[serde(default)]
    pub service_urls: ServiceUrls,
}

impl AppConfig {
    /// Create a configuration pointing at the given service base URL
    pub fn new(base: &str) -> Self {
        Self {
            service_urls: ServiceUrls::from_base(base),
        }
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a configuration from the environment, falling back to defaults
    ///
    /// `MERIDIAN_USER_INFO_URL` pins the user-info endpoint directly and
    /// wins over `MERIDIAN_SERVICE_BASE`.
    pub fn from_env() -> Self {
        let mut config = match std::env::var(ENV_SERVICE_BASE) {
            Ok(base) => Self::new(&base),
            Err(_) => Self::default(),
        };
        if let Ok(url) = std::env::var(ENV_USER_INFO_URL) {
            config.service_urls.user_info = url;
        }
        config
    }
}
