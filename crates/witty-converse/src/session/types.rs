//! Session state and turn results.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use witty_common::SessionId;

/// Where the session is in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the next user message.
    #[default]
    AwaitingUserInput,
    /// A turn is in flight.
    Dispatching,
}

/// Outcome of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    /// Transport calls made during the turn, including the one that got `stop`.
    pub rounds: u32,
    /// The identifier retired by the `stop` response.
    pub closed_session: SessionId,
}

/// What the session does after dispatching one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    FollowUp,
    Stop,
}

/// Marks the session as dispatching until dropped, so a turn whose future
/// is cancelled mid-round still returns the session to `AwaitingUserInput`.
pub(super) struct DispatchGuard {
    flag: Arc<AtomicBool>,
}

impl DispatchGuard {
    pub(super) fn enter(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self {
            flag: Arc::clone(flag),
        }
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
