//! Named authentication schemes.
//!
//! Operations declare which schemes they accept by name (`["api_key"]` for
//! every store endpoint). The base client looks those names up here and
//! injects the matching credentials. A listed scheme without a configured
//! credential is simply skipped and the server decides.

use std::fmt;

/// Scheme name used by every pet-store operation.
pub const API_KEY_SCHEME: &str = "api_key";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api_key";

/// An API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Credentials known to a client, keyed by scheme name.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    api_key: Option<ApiKey>,
}

impl Credentials {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self { api_key }
    }

    /// Headers to add for the given scheme names, in the order listed.
    pub fn headers_for(&self, auth_names: &[&str]) -> Vec<(String, String)> {
        auth_names
            .iter()
            .filter_map(|name| match *name {
                API_KEY_SCHEME => self
                    .api_key
                    .as_ref()
                    .map(|key| (API_KEY_HEADER.to_string(), key.expose().to_string())),
                other => {
                    tracing::debug!(scheme = other, "no credentials for auth scheme");
                    None
                }
            })
            .collect()
    }
}
