//! Error types for the pet-store client.
//!
//! # Design
//! Every non-2xx response becomes `ApiError::Api` with the raw status code and
//! body. The SDK does not classify statuses further; callers that care about
//! a particular code match on `status()`. The remaining variants cover the
//! failures that happen on our side of the wire.

use thiserror::Error;

/// Errors returned by the pet-store clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API error (HTTP {status}): {}", String::from_utf8_lossy(.body))]
    Api { status: u16, body: Vec<u8> },

    /// The request never produced a response (connect, DNS, timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// Request parameters could not be form-encoded.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_urlencoded::ser::Error),

    /// A 2xx response body did not match the expected model.
    #[error("deserialization failed: {source}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of an `Api` error, `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of an `Api` error decoded as UTF-8 (lossy).
    pub fn body_text(&self) -> Option<String> {
        match self {
            ApiError::Api { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
