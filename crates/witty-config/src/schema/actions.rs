//! Declarative actions: each `[actions.<name>]` table becomes an action that
//! merges the table's keys into the conversation context when invoked.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Action name to the slots it writes.
pub type ActionsConfig = BTreeMap<String, Map<String, Value>>;

/// Action names the runtime registers itself; config may not redefine them.
pub const RESERVED_ACTION_NAMES: &[&str] = &["say"];
