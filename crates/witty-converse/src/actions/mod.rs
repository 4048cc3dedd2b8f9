//! Application actions the bot can trigger.
//!
//! An action receives the current session id, mutable access to the shared
//! context, and the response that requested it. Its effects are entirely
//! side effects: slot updates, printed text, calls to other systems.

mod builtin;
mod registry;


use std::collections::HashMap;
use std::sync::Arc;

use witty_common::SessionId;

use crate::context::ContextStore;
use crate::response::TaggedResponse;
use crate::ActionError;

pub use builtin::{Say, StaticSlots};
pub use registry::{ActionRegistry, ActionRegistryBuilder};

/// Name of the action invoked for every `msg` response.
pub const SAY_ACTION: &str = "say";

/// Action name to handler.
pub type ActionMap = HashMap<String, Arc<dyn Action>>;

pub trait Action: Send + Sync {
    fn execute(
        &self,
        session_id: &SessionId,
        context: &mut ContextStore,
        response: &TaggedResponse,
    ) -> Result<(), ActionError>;
}

impl<F> Action for F
where
    F: Fn(&SessionId, &mut ContextStore, &TaggedResponse) -> Result<(), ActionError> + Send + Sync,
{
    fn execute(
        &self,
        session_id: &SessionId,
        context: &mut ContextStore,
        response: &TaggedResponse,
    ) -> Result<(), ActionError> {
        self(session_id, context, response)
    }
}
