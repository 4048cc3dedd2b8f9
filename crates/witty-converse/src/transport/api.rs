//! Transport trait implementation for HttpTransport.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;
use witty_common::SessionId;

use crate::response::TaggedResponse;
use crate::{Transport, TransportError};

use super::client::HttpTransport;

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        context: &Map<String, Value>,
        session_id: &SessionId,
        message: Option<&str>,
    ) -> Result<TaggedResponse, TransportError> {
        debug!(
            session = %session_id,
            follow_up = message.is_none(),
            slots = context.len(),
            "Converse request"
        );

        let response = self
            .build_request(context, session_id, message)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = text.chars().take(200).collect::<String>();
            return Err(TransportError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| TransportError::Parse(e.to_string()))?;

        Ok(TaggedResponse::from_value(json)?)
    }
}
