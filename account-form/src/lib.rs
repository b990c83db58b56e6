//! Account creation form with inline field validation.
//!
//! Each field owns a value and a set of named validators. Field and form
//! validity are recomputed on every change and exposed for UI feedback.

pub mod account;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod snapshot;
pub mod validators;
pub mod widget;

pub mod prelude {
    pub use crate::account::{FieldName, build_account_form};
    pub use crate::config::FormConfig;
    pub use crate::error::{ConfigError, FormError, SnapshotError, WidgetError};
    pub use crate::field::FieldState;
    pub use crate::form::{FormState, is_valid_form, update_form, validate_confirm_password};
    pub use crate::snapshot::FormSnapshot;
    pub use crate::validators::{Rule, Validators, kind};
    pub use crate::widget::{Feedback, FormEvent, NewAccountForm, WidgetUpdate};
}
