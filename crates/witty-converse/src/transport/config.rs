//! Converse transport configuration.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.wit.ai";
pub const DEFAULT_API_VERSION: &str = "20160526";

pub const TOKEN_ENV: &str = "WIT_ACCESS_TOKEN";
pub const BASE_URL_ENV: &str = "WIT_BASE_URL";
pub const VERSION_ENV: &str = "WIT_API_VERSION";

/// Converse transport configuration.
#[derive(Clone)]
pub struct TransportConfig {
    pub token: String,
    pub base_url: String,
    pub version: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl TransportConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Apply `WIT_BASE_URL` and `WIT_API_VERSION` when they are set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(VERSION_ENV).ok(),
        )
    }

    /// Replace base URL and version with the non-blank values given.
    pub fn with_overrides(mut self, base_url: Option<String>, version: Option<String>) -> Self {
        if let Some(base_url) = base_url.filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url;
        }
        if let Some(version) = version.filter(|v| !v.trim().is_empty()) {
            self.version = version;
        }
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_wit() {
        let config = TransportConfig::new("tok");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.version, DEFAULT_API_VERSION);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn debug_redacts_token() {
        let config = TransportConfig::new("L5DOSNSZQ3CTZ2DT");
        let debug = format!("{config:?}");
        assert!(!debug.contains("L5DOSNSZQ3CTZ2DT"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = TransportConfig::new("tok")
            .with_base_url("http://localhost:8080")
            .with_overrides(None, Some("20170307".into()));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.version, "20170307");

        let config = config.with_overrides(Some("https://eu.example.com".into()), Some("  ".into()));
        assert_eq!(config.base_url, "https://eu.example.com");
        assert_eq!(config.version, "20170307");
    }

    #[test]
    fn builders_override_fields() {
        let config = TransportConfig::new("tok")
            .with_base_url("http://localhost:9000")
            .with_version("20170307")
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.version, "20170307");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}
