//! Conversation context: the slots accumulated across turns.
//!
//! The whole map is sent as the request body of every converse call, so the
//! service always sees the latest merged state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Mutex;

/// Context shared by every session and action of one application.
pub type SharedContext = Arc<Mutex<ContextStore>>;

/// Key/value slots with shallow-merge updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextStore {
    slots: Map<String, Value>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this store for sharing between sessions.
    pub fn shared(self) -> SharedContext {
        Arc::new(Mutex::new(self))
    }

    /// Overwrite or insert every key of `patch`; other keys are untouched.
    pub fn merge(&mut self, patch: impl IntoIterator<Item = (String, Value)>) {
        for (key, value) in patch {
            self.slots.insert(key, value);
        }
    }

    /// Current full state.
    pub fn read(&self) -> &Map<String, Value> {
        &self.slots
    }

    /// Owned copy of the current state, for sending without holding a lock.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.slots.clone()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slots.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.slots.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.slots.remove(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl From<Map<String, Value>> for ContextStore {
    fn from(slots: Map<String, Value>) -> Self {
        Self { slots }
    }
}
