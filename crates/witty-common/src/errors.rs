use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Whether this error means "there is no file yet" rather than "the file is broken".
    pub fn is_missing_file(&self) -> bool {
        matches!(self, ConfigError::FileNotFound(_))
    }
}
