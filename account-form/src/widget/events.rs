use std::sync::atomic::{AtomicUsize, Ordering};

use crate::account::FieldName;
use crate::snapshot::FormSnapshot;

use super::Feedback;

/// Input events delivered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A keystroke changed an input's value.
    Input { field: String, value: String },
    /// An input lost focus.
    Blur { field: String },
    /// The form was submitted.
    Submit,
}

impl FormEvent {
    pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn blur(field: impl Into<String>) -> Self {
        Self::Blur {
            field: field.into(),
        }
    }
}

/// A listener the widget attaches on `init` and detaches on `dispose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Keyup(FieldName),
    Blur(FieldName),
    Submit,
}

/// State published to subscribers after each handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetUpdate {
    /// Whether the submit control is enabled.
    pub submit_enabled: bool,
    pub feedback: Feedback,
    /// Set when a submit was accepted.
    pub accepted: Option<FormSnapshot>,
}

/// Handle returned by `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    pub(super) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__subscription_{}", self.0)
    }
}
