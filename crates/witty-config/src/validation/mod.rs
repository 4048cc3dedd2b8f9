//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod actions;
mod api;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::WittyConfig;
use witty_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WittyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    api::validate_session(&mut errors, config);
    actions::validate_actions(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
