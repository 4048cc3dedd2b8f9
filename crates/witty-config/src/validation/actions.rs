use crate::schema::{WittyConfig, RESERVED_ACTION_NAMES};

/// Action names must be non-blank and must not shadow built-in actions.
pub(crate) fn validate_actions(errors: &mut Vec<String>, config: &WittyConfig) {
    for name in config.actions.keys() {
        if name.trim().is_empty() {
            errors.push("actions: action name must not be empty".into());
        } else if RESERVED_ACTION_NAMES.contains(&name.as_str()) {
            errors.push(format!("actions.{name} is reserved for a built-in action"));
        }
    }
}
