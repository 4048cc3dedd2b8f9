//! Core TOML config loading: read from path or platform default.

use crate::schema::WittyConfig;
use std::path::Path;
use tracing::info;
use witty_common::ConfigError;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Values are not validated here; see [`crate::load_config`].
pub fn load_from_path(path: &Path) -> Result<WittyConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: WittyConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/witty/config.toml`
/// On macOS: `~/Library/Application Support/witty/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<WittyConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(e) if e.is_missing_file() => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(WittyConfig::default())
        }
        Err(e) => Err(e),
    }
}
