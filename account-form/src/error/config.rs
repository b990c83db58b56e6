//! ConfigError for form configuration

use std::path::PathBuf;

/// Error type for loading a form configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A zero minimum would make the length rule unreachable.
    #[error("minPasswordLength must be at least 1")]
    InvalidMinLength,
}
