//! Account creation form controller.
//!
//! `NewAccountForm` owns the form state and turns host UI events into
//! validation updates. The host drives it explicitly:
//!
//! ```
//! use account_form::config::FormConfig;
//! use account_form::widget::{FormEvent, NewAccountForm};
//!
//! let mut widget = NewAccountForm::new(FormConfig::default());
//! widget.init().unwrap();
//!
//! for (field, value) in [
//!     ("name", "Ana"),
//!     ("email", "ana@x.com"),
//!     ("password", "Abcdef1"),
//!     ("confirmPassword", "Abcdef1"),
//! ] {
//!     widget.dispatch(FormEvent::input(field, value)).unwrap();
//! }
//! assert!(widget.is_submit_enabled());
//!
//! let update = widget.dispatch(FormEvent::Submit).unwrap().unwrap();
//! assert!(update.accepted.is_some());
//!
//! widget.dispose();
//! ```

mod events;
mod feedback;

pub use events::{Binding, FormEvent, SubscriptionId, WidgetUpdate};
pub use feedback::{
    CONFIRM_PASSWORD_MATCH, CONFIRM_PASSWORD_REQUIRED, EMAIL_FORMAT, EMAIL_REQUIRED, Feedback,
    NAME_REQUIRED, PasswordFeedback,
};

use std::fmt;

use log::{debug, info};

use crate::account::{FieldName, build_account_form};
use crate::config::FormConfig;
use crate::error::WidgetError;
use crate::form::{FormState, validate_confirm_password};
use crate::snapshot::FormSnapshot;
use crate::validators::kind;

type Listener = Box<dyn Fn(&WidgetUpdate) + Send + Sync>;

/// The account creation form.
pub struct NewAccountForm {
    config: FormConfig,
    state: Option<FormState>,
    initialized: bool,
    bindings: Vec<Binding>,
    subscribers: Vec<(SubscriptionId, Listener)>,
    submit_enabled: bool,
    feedback: Feedback,
}

impl NewAccountForm {
    pub fn new(config: FormConfig) -> Self {
        let feedback = Feedback::empty(&config);
        Self {
            config,
            state: None,
            initialized: false,
            bindings: Vec::new(),
            subscribers: Vec::new(),
            submit_enabled: false,
            feedback,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Seed the form from a JSON snapshot.
    pub fn set_value(&mut self, json: &str) -> Result<(), WidgetError> {
        let snapshot = FormSnapshot::from_json(json)?;
        self.seed(&snapshot)
    }

    /// Seed the form from snapshot values, replacing any current state.
    pub fn seed(&mut self, snapshot: &FormSnapshot) -> Result<(), WidgetError> {
        let mut form = build_account_form(&self.config);
        for field in FieldName::ALL {
            form.update(field.as_str(), snapshot.get(field))?;
        }
        validate_confirm_password(&mut form)?;

        self.submit_enabled = form.is_valid();
        self.feedback.password = PasswordFeedback::from_form(&form, self.config.min_password_length);
        debug!("Seeded account form: valid={}", self.submit_enabled);
        self.state = Some(form);
        Ok(())
    }

    /// Current values as a JSON snapshot, or `None` when there is no state.
    pub fn value(&self) -> Result<Option<String>, WidgetError> {
        Ok(self
            .state
            .as_ref()
            .map(|form| FormSnapshot::from_form(form).to_json())
            .transpose()?)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Build the form state (unless seeded) and attach listeners.
    pub fn init(&mut self) -> Result<(), WidgetError> {
        if self.initialized {
            return Err(WidgetError::AlreadyInitialized);
        }

        let form = self
            .state
            .get_or_insert_with(|| build_account_form(&self.config));
        self.submit_enabled = form.is_valid();
        self.feedback.password = PasswordFeedback::from_form(form, self.config.min_password_length);

        self.bindings = FieldName::ALL.into_iter().map(Binding::Keyup).collect();
        self.bindings.push(Binding::Blur(FieldName::Email));
        self.bindings.push(Binding::Submit);
        self.initialized = true;

        debug!("Account form initialized with {} bindings", self.bindings.len());
        Ok(())
    }

    /// Detach listeners, drop subscribers and discard the form state.
    pub fn dispose(&mut self) {
        debug!(
            "Disposing account form: {} bindings, {} subscribers",
            self.bindings.len(),
            self.subscribers.len()
        );
        self.bindings.clear();
        self.subscribers.clear();
        self.state = None;
        self.initialized = false;
        self.submit_enabled = false;
        self.feedback = Feedback::empty(&self.config);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Listeners currently attached.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn form(&self) -> Option<&FormState> {
        self.state.as_ref()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register an observer called after every handled event.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&WidgetUpdate) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.subscribers.push((id, Box::new(listener)));
        debug!("Subscribed {}", id);
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    fn notify(&self, update: &WidgetUpdate) {
        for (_, listener) in &self.subscribers {
            listener(update);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle one host event.
    ///
    /// Returns `Ok(None)` when no listener is attached for the event.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Option<WidgetUpdate>, WidgetError> {
        if !self.initialized {
            return Err(WidgetError::NotInitialized);
        }

        let accepted = match event {
            FormEvent::Input { field, value } => {
                let Some(field) = self.bound(&field, Binding::Keyup) else {
                    debug!("Ignoring input on unbound field '{}'", field);
                    return Ok(None);
                };
                self.on_input(field, value)?;
                None
            }
            FormEvent::Blur { field } => {
                let Some(field) = self.bound(&field, Binding::Blur) else {
                    debug!("Ignoring blur on unbound field '{}'", field);
                    return Ok(None);
                };
                self.on_blur(field)?;
                None
            }
            FormEvent::Submit => {
                if !self.bindings.contains(&Binding::Submit) {
                    debug!("Ignoring submit without a bound form");
                    return Ok(None);
                }
                self.on_submit()?
            }
        };

        let update = WidgetUpdate {
            submit_enabled: self.submit_enabled,
            feedback: self.feedback.clone(),
            accepted,
        };
        self.notify(&update);
        Ok(Some(update))
    }

    fn bound(&self, name: &str, binding: fn(FieldName) -> Binding) -> Option<FieldName> {
        let field = name.parse::<FieldName>().ok()?;
        self.bindings.contains(&binding(field)).then_some(field)
    }

    fn on_input(&mut self, field: FieldName, value: String) -> Result<(), WidgetError> {
        let form = self.state.as_mut().ok_or(WidgetError::NotInitialized)?;
        form.update(field.as_str(), value)?;

        let confirm_typed = form
            .field(FieldName::ConfirmPassword.as_str())
            .is_some_and(|f| !f.value().is_empty());
        let recheck_confirm = match field {
            FieldName::ConfirmPassword => true,
            FieldName::Password => confirm_typed,
            _ => false,
        };
        if recheck_confirm {
            validate_confirm_password(form)?;
        }

        self.submit_enabled = form.is_valid();
        if field == FieldName::Password {
            self.feedback.password =
                PasswordFeedback::from_form(form, self.config.min_password_length);
        }
        Ok(())
    }

    fn on_blur(&mut self, field: FieldName) -> Result<(), WidgetError> {
        let form = self.state.as_ref().ok_or(WidgetError::NotInitialized)?;
        if field == FieldName::Email {
            self.feedback.email = form
                .error(FieldName::Email.as_str(), kind::EMAIL)
                .then_some(EMAIL_FORMAT);
        }
        Ok(())
    }

    /// Submission never leaves the widget; a valid form is logged and
    /// returned to subscribers.
    fn on_submit(&mut self) -> Result<Option<FormSnapshot>, WidgetError> {
        let form = self.state.as_ref().ok_or(WidgetError::NotInitialized)?;

        let accepted = if form.is_valid() {
            let snapshot = FormSnapshot::from_form(form);
            info!("Account form submitted: {:?}", snapshot.redacted());
            Some(snapshot)
        } else {
            debug!(
                "Submit blocked, invalid fields: {:?}",
                form.invalid_fields().collect::<Vec<_>>()
            );
            None
        };

        let name = FieldName::Name.as_str();
        let email = FieldName::Email.as_str();
        let confirm = FieldName::ConfirmPassword.as_str();

        self.feedback.name = form.error(name, kind::REQUIRED).then_some(NAME_REQUIRED);
        self.feedback.email = if form.error(email, kind::REQUIRED) {
            Some(EMAIL_REQUIRED)
        } else {
            form.error(email, kind::EMAIL).then_some(EMAIL_FORMAT)
        };
        self.feedback.confirm_password = if form.error(confirm, kind::REQUIRED) {
            Some(CONFIRM_PASSWORD_REQUIRED)
        } else {
            form.error(confirm, kind::MATCH_CONFIRMATION)
                .then_some(CONFIRM_PASSWORD_MATCH)
        };

        Ok(accepted)
    }
}

impl Default for NewAccountForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl fmt::Debug for NewAccountForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccountForm")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("initialized", &self.initialized)
            .field("bindings", &self.bindings)
            .field("subscribers", &self.subscribers.len())
            .field("submit_enabled", &self.submit_enabled)
            .field("feedback", &self.feedback)
            .finish()
    }
}
