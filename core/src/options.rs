//! Per-call request overrides.

use std::time::Duration;

/// Options accepted by every operation. Passing `None` is the same as
/// passing `RequestOptions::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the client-wide timeout for this call.
    pub timeout: Option<Duration>,
    /// Sent after the SDK's own headers.
    pub additional_headers: Vec<(String, String)>,
    /// Appended to the query string.
    pub additional_params: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_params.push((name.into(), value.into()));
        self
    }
}
