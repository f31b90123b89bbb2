//! Client configuration
//!
//! Construction parameters for [`EasyBrokerClient`](crate::client::EasyBrokerClient):
//! API key, base URL, page size, and the retry/backoff knobs. All fields have
//! builder setters and environment-based loading for the CLI.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "EASYBROKER_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "EASYBROKER_BASE_URL";

/// Default base URL (staging endpoint)
pub const DEFAULT_BASE_URL: &str = "https://api.stagingeb.com/v1";

/// Configuration for the EasyBroker client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent in the `X-Authorization` header
    pub api_key: String,
    /// Base URL for all requests (trailing slashes are stripped)
    pub base_url: String,
    /// Number of items requested per page; also the last-page signal
    pub page_size: u32,
    /// Maximum number of retries per page
    pub max_retries: u32,
    /// Backoff factor in seconds; wait grows as `factor * 2^(attempt - 1)`
    pub backoff_factor: f64,
    /// Request timeout for the default transport
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 50,
            max_retries: 3,
            backoff_factor: 0.5,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a config with the given API key and defaults for everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment
    ///
    /// Requires `EASYBROKER_API_KEY`; honors `EASYBROKER_BASE_URL` when set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::config(format!("{API_KEY_ENV} is not set")))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Runs at client construction, before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config("api_key is required"));
        }
        Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(Error::config("page_size must be at least 1"));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor < 0.0 {
            return Err(Error::config("backoff_factor must be a non-negative number"));
        }
        Ok(())
    }

    /// Base URL with trailing slashes stripped
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Builder for client config
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the maximum retry count
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the backoff factor in seconds
    pub fn backoff_factor(mut self, factor: f64) -> Self {
        self.config.backoff_factor = factor;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
