//! Serialized form values.
//!
//! A snapshot is the string-encoded form value a host hands to the widget
//! and reads back from it.

use serde::{Deserialize, Serialize};

use crate::account::FieldName;
use crate::error::SnapshotError;
use crate::form::FormState;

const REDACTED: &str = "********";

/// Plain values of the four account fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Parse)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    /// Capture current values. Undeclared fields read as empty.
    pub fn from_form(form: &FormState) -> Self {
        let value = |field: FieldName| {
            form.field(field.as_str())
                .map(|f| f.value().to_string())
                .unwrap_or_default()
        };
        Self {
            name: value(FieldName::Name),
            email: value(FieldName::Email),
            password: value(FieldName::Password),
            confirm_password: value(FieldName::ConfirmPassword),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Copy with both password fields masked, for logging.
    pub fn redacted(&self) -> Self {
        let mask = |s: &str| {
            if s.is_empty() {
                String::new()
            } else {
                REDACTED.to_string()
            }
        };
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            password: mask(&self.password),
            confirm_password: mask(&self.confirm_password),
        }
    }
}
