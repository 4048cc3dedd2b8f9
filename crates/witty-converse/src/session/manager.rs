//! ConversationSession struct and construction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use witty_common::SessionId;

use crate::actions::ActionRegistry;
use crate::context::SharedContext;
use crate::Transport;

use super::types::SessionState;

/// Rounds allowed in one turn before the session gives up on the service.
pub const DEFAULT_MAX_ROUNDS: u32 = 20;

/// One user's conversation with the converse service.
pub struct ConversationSession {
    /// Current session id; rotated when the service says `stop`.
    pub(super) id: SessionId,
    /// Slots shared with actions and other sessions.
    pub(super) context: SharedContext,
    /// Actions the service may ask for.
    pub(super) actions: Arc<ActionRegistry>,
    /// Request/response round trips.
    pub(super) transport: Arc<dyn Transport>,
    /// Safety valve against a service that never stops.
    pub(super) max_rounds: u32,
    /// Set while a turn is in flight; cleared by `DispatchGuard` on drop.
    pub(super) dispatching: Arc<AtomicBool>,
}

impl ConversationSession {
    pub fn new(
        transport: Arc<dyn Transport>,
        context: SharedContext,
        actions: Arc<ActionRegistry>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            context,
            actions,
            transport,
            max_rounds: DEFAULT_MAX_ROUNDS,
            dispatching: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_max_rounds(mut self, max: u32) -> Self {
        self.max_rounds = max;
        self
    }

    /// Start from a known id instead of a random one.
    pub fn with_session_id(mut self, id: SessionId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        if self.dispatching.load(Ordering::Acquire) {
            SessionState::Dispatching
        } else {
            SessionState::AwaitingUserInput
        }
    }

    pub fn context(&self) -> &SharedContext {
        &self.context
    }

    pub fn actions(&self) -> &Arc<ActionRegistry> {
        &self.actions
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("max_rounds", &self.max_rounds)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}
