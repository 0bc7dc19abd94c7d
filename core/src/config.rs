//! Client configuration.
//!
//! `ClientConfig` is built either explicitly through the builder or from the
//! process environment:
//!
//! | variable                | meaning                        |
//! |-------------------------|--------------------------------|
//! | `PETSTORE_BASE_URL`     | API root, no trailing slash    |
//! | `PETSTORE_API_KEY`      | value of the `api_key` header  |
//! | `PETSTORE_TIMEOUT_SECS` | default per-request timeout    |

use std::time::Duration;

use crate::auth::ApiKey;
use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://petstore3.swagger.io/api/v3";

pub const ENV_BASE_URL: &str = "PETSTORE_BASE_URL";
pub const ENV_API_KEY: &str = "PETSTORE_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "PETSTORE_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<ApiKey>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn builder(base_url: &str) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(base_url),
        }
    }

    /// Read the configuration from `PETSTORE_*` environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut builder = Self::builder(&base_url);
        if let Some(key) = lookup(ENV_API_KEY).filter(|key| !key.is_empty()) {
            builder = builder.api_key(key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

fn default_user_agent() -> String {
    format!("petstore-sdk-rust/{}", env!("CARGO_PKG_VERSION"))
}
