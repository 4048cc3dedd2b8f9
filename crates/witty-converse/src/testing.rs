//! Mock implementations for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};
use witty_common::SessionId;

use crate::context::ContextStore;
use crate::response::TaggedResponse;
use crate::{Action, ActionError, Transport, TransportError};

/// One call observed by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub context: Map<String, Value>,
    pub session_id: SessionId,
    pub message: Option<String>,
}

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<TaggedResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: impl IntoIterator<Item = TaggedResponse>) -> Self {
        let mock = Self::new();
        for response in responses {
            mock.queue_response(response);
        }
        mock
    }

    pub fn queue_response(&self, response: TaggedResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        context: &Map<String, Value>,
        session_id: &SessionId,
        message: Option<&str>,
    ) -> Result<TaggedResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            context: context.clone(),
            session_id: session_id.clone(),
            message: message.map(String::from),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no mock response queued".into())))
    }
}

/// Transport whose requests never complete.
#[derive(Default)]
pub struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn send(
        &self,
        _context: &Map<String, Value>,
        _session_id: &SessionId,
        _message: Option<&str>,
    ) -> Result<TaggedResponse, TransportError> {
        std::future::pending().await
    }
}

/// Action that records every invocation.
#[derive(Clone, Default)]
pub struct RecordingAction {
    calls: Arc<Mutex<Vec<(SessionId, TaggedResponse)>>>,
}

impl RecordingAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(SessionId, TaggedResponse)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Action for RecordingAction {
    fn execute(
        &self,
        session_id: &SessionId,
        _context: &mut ContextStore,
        response: &TaggedResponse,
    ) -> Result<(), ActionError> {
        self.calls
            .lock()
            .unwrap()
            .push((session_id.clone(), response.clone()));
        Ok(())
    }
}
