//! Converse protocol engine for witty.
//!
//! Drives the multi-round exchange with a Wit.ai style `/converse` endpoint:
//! - Shared conversation context (slots) with shallow-merge semantics
//! - Set-once registry of named actions the bot can trigger
//! - Tagged response decoding (`merge`, `msg`, `action`, `stop`)
//! - Session state machine with follow-up rounds and id rotation
//! - reqwest transport and a line-oriented interaction loop

pub mod actions;
pub mod context;
pub mod entities;
pub mod interaction;
pub mod response;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use serde_json::{Map, Value};
use witty_common::SessionId;

pub use actions::{Action, ActionMap, ActionRegistry, ActionRegistryBuilder, Say, StaticSlots};
pub use context::{ContextStore, SharedContext};
pub use interaction::{Interaction, InteractionError};
pub use response::{DecodeError, ResponseTag, TaggedResponse};
pub use session::{ConversationSession, SessionState, TurnSummary};
pub use transport::{HttpTransport, TransportConfig};

/// One request/response round trip with the converse service.
///
/// `message` is `Some` only on the first round of a turn; follow-up rounds
/// ask the service "what next" without new user input.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        context: &Map<String, Value>,
        session_id: &SessionId,
        message: Option<&str>,
    ) -> Result<TaggedResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Transport configuration error: {0}")]
    Config(String),
}

impl From<DecodeError> for TransportError {
    fn from(err: DecodeError) -> Self {
        TransportError::Parse(err.to_string())
    }
}

/// Failure raised by an action handler.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("response has no `{0}` field")]
    MissingField(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// Everything that can abort a turn.
#[derive(Debug, thiserror::Error)]
pub enum ConverseError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("response decode error: {0}")]
    Decode(String),
    #[error("invalid entity payload: {0}")]
    InvalidEntityPayload(String),
    #[error("no action registered under `{0}`")]
    UnknownAction(String),
    #[error("action registry has not been initialized")]
    NotConfigured,
    #[error("action registry can be initialized only once")]
    SetOnce,
    #[error("unrecognized response tag `{0}`")]
    UnrecognizedTag(String),
    #[error("action `{name}` failed: {source}")]
    Action { name: String, source: ActionError },
    #[error("turn exceeded {0} rounds without a stop")]
    MaxRoundsExceeded(u32),
}
