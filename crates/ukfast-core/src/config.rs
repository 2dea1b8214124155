//! Configuration structures for UKFast SDK clients.
//!
//! This module provides the top-level configuration used to construct
//! authenticated clients: API base URL, API key and request timeout, with
//! validation and environment-variable loading.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default base URL for the UKFast API.
pub const DEFAULT_API_URL: &str = "https://api.ukfast.io";

/// Environment variable holding the API base URL override.
pub const ENV_API_URL: &str = "UKF_API_URL";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "UKF_API_KEY";

/// Configuration for a UKFast SDK client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SdkConfig {
    /// API base URL
    #[validate(url)]
    pub api_url: String,

    /// API key used for authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl SdkConfig {
    /// Create a new configuration for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(api_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_url: api_url.into(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        };

        config
            .validate()
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Load configuration from the environment.
    ///
    /// Reads `UKF_API_URL` (falling back to the production endpoint) and
    /// `UKF_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid.
    pub fn from_env() -> Result<Self, Error> {
        let api_url =
            std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(api_url)?;
        if let Ok(api_key) = std::env::var(ENV_API_KEY) {
            config.api_key = Some(api_key);
        }
        Ok(config)
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate the API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url).map_err(|e| Error::Config(format!("Invalid API URL: {e}")))
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
