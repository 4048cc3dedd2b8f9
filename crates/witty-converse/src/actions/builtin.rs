//! Actions shipped with witty.

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};
use witty_common::SessionId;

use crate::context::ContextStore;
use crate::response::TaggedResponse;
use crate::ActionError;

use super::Action;

/// Writes `Bot: <msg>` for every message response.
pub struct Say<W> {
    writer: Arc<Mutex<W>>,
}

impl Say<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Say<W> {
    pub fn new(writer: W) -> Self {
        Self::shared(Arc::new(Mutex::new(writer)))
    }

    /// Write into a writer the caller keeps a handle to.
    pub fn shared(writer: Arc<Mutex<W>>) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> Action for Say<W> {
    fn execute(
        &self,
        _session_id: &SessionId,
        _context: &mut ContextStore,
        response: &TaggedResponse,
    ) -> Result<(), ActionError> {
        let msg = response.msg().ok_or(ActionError::MissingField("msg"))?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ActionError::Other("say writer lock poisoned".into()))?;
        writeln!(writer, "Bot: {msg}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Writes a fixed set of slots into the context.
#[derive(Debug, Clone)]
pub struct StaticSlots {
    slots: Map<String, Value>,
}

impl StaticSlots {
    pub fn new(slots: Map<String, Value>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &Map<String, Value> {
        &self.slots
    }
}

impl Action for StaticSlots {
    fn execute(
        &self,
        _session_id: &SessionId,
        context: &mut ContextStore,
        _response: &TaggedResponse,
    ) -> Result<(), ActionError> {
        context.merge(self.slots.clone());
        Ok(())
    }
}
