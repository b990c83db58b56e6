//! Whole-form validation state.
//!
//! A [`FormState`] is an ordered set of named [`FieldState`]s. Updates are
//! field-local: changing one field reruns only that field's rules.
//!
//! # Example
//!
//! ```
//! use account_form::field::FieldState;
//! use account_form::form::{FormState, is_valid_form, update_form};
//! use account_form::validators::{self, Validators, kind};
//!
//! let form = FormState::new().with_field(
//!     "name",
//!     FieldState::build("", Validators::new().rule(kind::REQUIRED, validators::required)),
//! );
//! assert!(!is_valid_form(&form));
//!
//! let form = update_form(&form, "name", "Ana").unwrap();
//! assert!(is_valid_form(&form));
//! ```

use log::{trace, warn};

use crate::account::FieldName;
use crate::error::FormError;
use crate::field::FieldState;
use crate::validators::{self, kind};

/// Ordered mapping of field name to field state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: Vec<(String, FieldState)>,
}

impl FormState {
    /// Create a form with no fields.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a field. Redeclaring a name replaces it at its original position.
    pub fn with_field(mut self, name: impl Into<String>, field: FieldState) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = field,
            None => self.fields.push((name, field)),
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FieldState, FormError> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
            .ok_or_else(|| {
                warn!("Update for unknown field '{}'", name);
                FormError::unknown_field(name)
            })
    }

    /// Set a field's value and revalidate that field only.
    ///
    /// Fails without touching the form when `name` is not declared.
    pub fn update(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self.field_mut(name)?;
        field.set_value(value);
        trace!("Updated field '{}': valid={}", name, field.is_valid());
        Ok(())
    }

    /// True iff every field is valid. A form without fields is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, f)| f.is_valid())
    }

    /// Compare `field` against `against` and record the outcome as `kind`.
    ///
    /// The mismatch flag is folded into `field`'s validity alongside its own
    /// rules. Returns whether the mismatch error is set.
    pub fn validate_match(
        &mut self,
        field: &str,
        against: &str,
        kind: &str,
    ) -> Result<bool, FormError> {
        let original = self
            .field(against)
            .ok_or_else(|| FormError::unknown_field(against))?
            .value()
            .to_string();
        let target = self.field_mut(field)?;
        let mismatch = validators::match_confirmation(target.value(), &original);
        target.set_error(kind, mismatch);
        Ok(mismatch)
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Names of the fields that are currently invalid.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, f)| !f.is_valid()).map(|(n, _)| n)
    }

    /// Whether `field` currently has the `kind` error set.
    pub fn error(&self, field: &str, kind: &str) -> bool {
        self.field(field).is_some_and(|f| f.has_error(kind))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Return a copy of `form` with `name` set to `value`.
pub fn update_form(
    form: &FormState,
    name: &str,
    value: impl Into<String>,
) -> Result<FormState, FormError> {
    let mut next = form.clone();
    next.update(name, value)?;
    Ok(next)
}

pub fn is_valid_form(form: &FormState) -> bool {
    form.is_valid()
}

/// Check the confirmation field against the password field.
///
/// Sets `matchConfirmation` on `confirmPassword` and returns its value.
pub fn validate_confirm_password(form: &mut FormState) -> Result<bool, FormError> {
    form.validate_match(
        FieldName::ConfirmPassword.as_str(),
        FieldName::Password.as_str(),
        kind::MATCH_CONFIRMATION,
    )
}
