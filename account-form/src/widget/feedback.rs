use crate::account::{FieldName, build_account_form};
use crate::config::FormConfig;
use crate::form::FormState;
use crate::validators::kind;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const EMAIL_FORMAT: &str = "Enter an email in a valid format (e.g. example@email.com)";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const CONFIRM_PASSWORD_MATCH: &str = "Passwords do not match";

/// Messages and flags shown next to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub password: PasswordFeedback,
}

impl Feedback {
    /// No messages, and the checklist of an empty password.
    pub fn empty(config: &FormConfig) -> Self {
        let form = build_account_form(config);
        Self {
            password: PasswordFeedback::from_form(&form, config.min_password_length),
            ..Default::default()
        }
    }

    /// Message currently shown for `field`. Password uses its checklist instead.
    pub fn message(&self, field: FieldName) -> Option<&'static str> {
        match field {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Password => None,
            FieldName::ConfirmPassword => self.confirm_password,
        }
    }
}

/// Password strength checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordFeedback {
    pub min_length: usize,
    pub length_error: bool,
    pub capital_case_error: bool,
    pub number_error: bool,
}

impl PasswordFeedback {
    /// Read the password field's strength flags.
    pub fn from_form(form: &FormState, min_length: usize) -> Self {
        let password = FieldName::Password.as_str();
        Self {
            min_length,
            length_error: form.error(password, kind::MIN_LENGTH),
            capital_case_error: form.error(password, kind::CHARACTER),
            number_error: form.error(password, kind::NUMBER),
        }
    }

    /// Label and error flag for each checklist line.
    pub fn items(&self) -> [(String, bool); 3] {
        [
            (
                format!("At least {} characters", self.min_length),
                self.length_error,
            ),
            (
                "At least one capital letter".to_string(),
                self.capital_case_error,
            ),
            ("At least one number".to_string(), self.number_error),
        ]
    }

    pub fn is_strong(&self) -> bool {
        !(self.length_error || self.capital_case_error || self.number_error)
    }
}
