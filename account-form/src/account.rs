//! The account creation form: its four fields and their rules.

use std::fmt;
use std::str::FromStr;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::field::FieldState;
use crate::form::FormState;
use crate::validators::{self, Validators, kind};

/// Fields of the account form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// The input's `name` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, so `confirmpassword` resolves too.
impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::unknown_field(s))
    }
}

/// Rules bound to `field`.
pub fn field_validators(field: FieldName, config: &FormConfig) -> Validators {
    let rules = Validators::new().rule(kind::REQUIRED, validators::required);
    match field {
        FieldName::Name | FieldName::ConfirmPassword => rules,
        FieldName::Email => rules.rule(kind::EMAIL, validators::email),
        FieldName::Password => rules
            .rule(kind::MIN_LENGTH, validators::min_length(config.min_password_length))
            .rule(kind::CHARACTER, validators::character)
            .rule(kind::NUMBER, validators::number),
    }
}

/// Build the empty account form.
pub fn build_account_form(config: &FormConfig) -> FormState {
    FieldName::ALL
        .into_iter()
        .fold(FormState::new(), |form, field| {
            form.with_field(
                field.as_str(),
                FieldState::build("", field_validators(field, config)),
            )
        })
}
