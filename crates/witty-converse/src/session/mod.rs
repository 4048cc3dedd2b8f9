//! Conversation session management.
//!
//! A `ConversationSession` owns the session id and drives the converse
//! protocol: each turn sends the user message once, then keeps asking the
//! service for the next step until it answers `stop`.

mod manager;
mod turn;
mod types;


pub use manager::{ConversationSession, DEFAULT_MAX_ROUNDS};
pub use types::{SessionState, TurnSummary};
