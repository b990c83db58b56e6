//! Per-field validation state.

use log::trace;

use crate::validators::Validators;

/// One form field: its value, the rules bound to it and their outcome.
///
/// `errors` holds one entry per bound rule (plus any cross-field entry set
/// through [`FieldState::set_error`]) and `valid` is true iff none of them
/// is set. Both are recomputed together whenever the value changes.
#[derive(Debug, Clone)]
pub struct FieldState {
    value: String,
    validators: Validators,
    errors: Vec<(String, bool)>,
    valid: bool,
}

impl FieldState {
    /// Build a field and run every rule against the initial value.
    pub fn build(value: impl Into<String>, validators: Validators) -> Self {
        let mut field = Self {
            value: value.into(),
            validators,
            errors: Vec::new(),
            valid: true,
        };
        field.revalidate();
        field
    }

    /// Replace the value and recompute the whole error map.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.revalidate();
    }

    /// Set or add an error entry that is not driven by a bound rule.
    ///
    /// The entry lives until the next value change.
    pub fn set_error(&mut self, kind: &str, present: bool) {
        match self.errors.iter_mut().find(|(k, _)| k == kind) {
            Some(entry) => entry.1 = present,
            None => self.errors.push((kind.to_string(), present)),
        }
        self.valid = self.errors.iter().all(|(_, e)| !e);
    }

    fn revalidate(&mut self) {
        let errors: Vec<(String, bool)> = self
            .validators
            .iter()
            .map(|(kind, rule)| (kind.to_string(), rule.check(&self.value)))
            .collect();
        self.valid = errors.iter().all(|(_, e)| !e);
        self.errors = errors;
        trace!("Revalidated field: valid={} errors={:?}", self.valid, self.errors);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    /// Error map in rule order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, bool)> {
        self.errors.iter().map(|(k, e)| (k.as_str(), *e))
    }

    /// Flag for `kind`, or `None` if the field has no such entry.
    pub fn error(&self, kind: &str) -> Option<bool> {
        self.errors.iter().find(|(k, _)| k == kind).map(|(_, e)| *e)
    }

    /// Whether `kind` is currently set. Unknown kinds are never set.
    pub fn has_error(&self, kind: &str) -> bool {
        self.error(kind).unwrap_or(false)
    }

    /// Kinds of the entries that are currently set.
    pub fn failing(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().filter(|(_, e)| *e).map(|(k, _)| k.as_str())
    }
}

impl PartialEq for FieldState {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.valid == other.valid
            && self.errors == other.errors
            && self.validators.kinds().eq(other.validators.kinds())
    }
}
