//! Configuration schema types for witty.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod actions;
mod api;
mod session;
mod system;

pub use actions::*;
pub use api::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for witty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WittyConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub actions: ActionsConfig,
}
