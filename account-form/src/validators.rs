//! Field validators.
//!
//! A validator answers a single question about a value: is there an error?
//! Every validator returns `true` when the value fails its rule and `false`
//! when it passes. Validators are total and side-effect free.
//!
//! # Example
//!
//! ```
//! use account_form::validators::{self, Rule, Validators, kind};
//!
//! let rules = Validators::new()
//!     .rule(kind::REQUIRED, validators::required)
//!     .rule(kind::MIN_LENGTH, validators::min_length(6));
//!
//! assert_eq!(rules.len(), 2);
//! assert!(validators::min_length(6).check("abc"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use email_address::EmailAddress;

/// Error-kind names used as keys in a field's error map.
pub mod kind {
    pub const REQUIRED: &str = "required";
    pub const EMAIL: &str = "email";
    pub const MIN_LENGTH: &str = "minLength";
    pub const CHARACTER: &str = "character";
    pub const NUMBER: &str = "number";
    /// Cross-field rule, set by [`crate::form::validate_confirm_password`].
    pub const MATCH_CONFIRMATION: &str = "matchConfirmation";
}

/// A single validation rule.
///
/// Implemented for any `Fn(&str) -> bool` so plain functions such as
/// [`required`] can be bound directly.
pub trait Rule: Send + Sync {
    /// Returns `true` when `value` fails this rule.
    fn check(&self, value: &str) -> bool;
}

impl<F> Rule for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, value: &str) -> bool {
        self(value)
    }
}

/// Error when the value is empty.
///
/// Whitespace counts as content.
pub fn required(value: &str) -> bool {
    value.is_empty()
}

/// Error when a non-empty value is not shaped like `local@domain.tld`.
///
/// Empty values pass; emptiness belongs to [`required`].
pub fn email(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    match EmailAddress::from_str(value) {
        Ok(address) => !is_plain_address(&address, value),
        Err(_) => true,
    }
}

/// Bare `local@domain.tld`: no display text, quoted local part or domain literal.
fn is_plain_address(address: &EmailAddress, value: &str) -> bool {
    let domain = address.domain();
    address.as_str() == value
        && !address.local_part().starts_with('"')
        && !domain.starts_with('[')
        && domain.contains('.')
        && !domain.split('.').any(str::is_empty)
}

/// Build a minimum-length validator.
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

/// Error when the value is shorter than `min` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength {
    pub min: usize,
}

impl Rule for MinLength {
    fn check(&self, value: &str) -> bool {
        value.chars().count() < self.min
    }
}

/// Error when the value contains no uppercase letter.
pub fn character(value: &str) -> bool {
    !value.chars().any(char::is_uppercase)
}

/// Error when the value contains no digit.
pub fn number(value: &str) -> bool {
    !value.chars().any(|c| c.is_ascii_digit())
}

/// Error when the confirmation differs from the original.
pub fn match_confirmation(confirmation: &str, original: &str) -> bool {
    confirmation != original
}

/// Ordered set of named rules bound to one field.
///
/// Kinds are unique; binding a kind twice replaces the earlier rule in place.
#[derive(Clone, Default)]
pub struct Validators {
    rules: Vec<(String, Arc<dyn Rule>)>,
}

impl Validators {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Bind `rule` under the error-kind name `kind`.
    pub fn rule(mut self, kind: impl Into<String>, rule: impl Rule + 'static) -> Self {
        let kind = kind.into();
        let rule: Arc<dyn Rule> = Arc::new(rule);
        match self.rules.iter_mut().find(|(k, _)| *k == kind) {
            Some(slot) => slot.1 = rule,
            None => self.rules.push((kind, rule)),
        }
        self
    }

    /// Iterate rules in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Rule)> {
        self.rules.iter().map(|(k, r)| (k.as_str(), r.as_ref()))
    }

    /// Error-kind names in binding order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}
