//! witty configuration system.
//!
//! Provides TOML-based configuration for the converse client. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use witty_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("talking to {}", config.api.base_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::WittyConfig;

use std::path::Path;

use witty_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The default path is created from the
/// commented template when missing. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<WittyConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
