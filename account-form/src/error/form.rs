//! FormError for form-state updates

/// Error type for operations addressing a field by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The form has no field with this name.
    #[error("Field '{field}' not found in form")]
    UnknownField { field: String },
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}
