//! Set-once registry of named actions.

use std::sync::{Arc, OnceLock};

use tracing::debug;
use witty_common::SessionId;

use crate::context::ContextStore;
use crate::response::TaggedResponse;
use crate::{ActionError, ConverseError};

use super::{Action, ActionMap};

/// Immutable mapping from action name to handler, installed exactly once.
///
/// Most hosts build a ready registry with [`ActionRegistry::builder`]. A
/// registry created with [`ActionRegistry::new`] starts unconfigured and
/// accepts a single [`initialize`](ActionRegistry::initialize) call.
#[derive(Default)]
pub struct ActionRegistry {
    actions: OnceLock<ActionMap>,
}

impl ActionRegistry {
    /// An unconfigured registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ActionRegistryBuilder {
        ActionRegistryBuilder::default()
    }

    /// Install the mapping. A second call fails and keeps the first mapping.
    pub fn initialize(&self, actions: ActionMap) -> Result<(), ConverseError> {
        let count = actions.len();
        self.actions.set(actions).map_err(|_| ConverseError::SetOnce)?;
        debug!(actions = count, "action registry initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.actions.get().is_some()
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Action>, ConverseError> {
        let actions = self.actions.get().ok_or(ConverseError::NotConfigured)?;
        actions
            .get(name)
            .cloned()
            .ok_or_else(|| ConverseError::UnknownAction(name.to_string()))
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .actions
            .get()
            .map(|actions| actions.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("initialized", &self.is_initialized())
            .field("actions", &self.names())
            .finish()
    }
}

/// Collects actions, then produces an initialized [`ActionRegistry`].
#[derive(Default)]
pub struct ActionRegistryBuilder {
    actions: ActionMap,
}

impl ActionRegistryBuilder {
    /// Register an action; a later registration under the same name wins.
    pub fn register(mut self, name: impl Into<String>, action: impl Action + 'static) -> Self {
        self.actions.insert(name.into(), Arc::new(action));
        self
    }

    /// Register a closure as an action.
    pub fn register_fn<F>(self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&SessionId, &mut ContextStore, &TaggedResponse) -> Result<(), ActionError>
            + Send
            + Sync
            + 'static,
    {
        self.register(name, action)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The collected mapping, for [`ActionRegistry::initialize`].
    pub fn into_map(self) -> ActionMap {
        self.actions
    }

    pub fn build(self) -> ActionRegistry {
        ActionRegistry {
            actions: OnceLock::from(self.actions),
        }
    }
}
