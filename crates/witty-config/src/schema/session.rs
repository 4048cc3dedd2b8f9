use serde::{Deserialize, Serialize};

/// Conversation session limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum transport rounds in one turn before giving up (valid range: 1-1000).
    pub max_rounds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_rounds: 20 }
    }
}
