//! Types shared by every witty crate: configuration errors and
//! conversation session identifiers.

pub mod errors;
pub mod id;

pub use errors::ConfigError;
pub use id::{new_correlation_id, new_id, SessionId};
