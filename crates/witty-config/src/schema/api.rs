//! Remote converse API connection settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection settings for the converse endpoint.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/converse` is appended per request.
    pub base_url: String,
    /// API version sent as the `v` query parameter.
    pub version: String,
    /// Bearer access token. Usually supplied through `WIT_ACCESS_TOKEN` instead.
    pub token: Option<String>,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.wit.ai".into(),
            version: "20160526".into(),
            token: None,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
