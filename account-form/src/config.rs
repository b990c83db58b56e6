//! Form configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default minimum password length.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Tunables for the account form.
///
/// Serialized as camelCase JSON; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    /// Shortest accepted password, in characters.
    pub min_password_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl FormConfig {
    /// Set the minimum password length.
    pub fn min_password_length(mut self, min: usize) -> Self {
        self.min_password_length = min;
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::InvalidMinLength);
        }
        Ok(())
    }
}
