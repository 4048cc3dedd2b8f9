//! HttpTransport struct and request building.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};
use witty_common::SessionId;

use crate::TransportError;

use super::config::TransportConfig;

pub(crate) const CONVERSE_PATH: &str = "/converse";

/// reqwest-backed converse transport.
pub struct HttpTransport {
    pub(crate) config: TransportConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub(crate) fn converse_url(&self) -> String {
        format!(
            "{}{CONVERSE_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Query parameters for one round; `q` only when there is a message.
    pub(crate) fn query_params<'a>(
        &'a self,
        session_id: &'a SessionId,
        message: Option<&'a str>,
    ) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![
            ("v", self.config.version.as_str()),
            ("session_id", session_id.as_str()),
        ];
        if let Some(message) = message {
            params.push(("q", message));
        }
        params
    }

    pub(crate) fn build_request(
        &self,
        context: &Map<String, Value>,
        session_id: &SessionId,
        message: Option<&str>,
    ) -> reqwest::RequestBuilder {
        self.http
            .post(self.converse_url())
            .query(&self.query_params(session_id, message))
            .bearer_auth(&self.config.token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(context)
    }
}
