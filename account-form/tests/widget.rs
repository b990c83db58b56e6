use std::sync::{Arc, Mutex};

use account_form::account::FieldName;
use account_form::config::FormConfig;
use account_form::error::WidgetError;
use account_form::snapshot::FormSnapshot;
use account_form::validators::kind;
use account_form::widget::{
    Binding, CONFIRM_PASSWORD_MATCH, CONFIRM_PASSWORD_REQUIRED, EMAIL_FORMAT, EMAIL_REQUIRED,
    FormEvent, NAME_REQUIRED, NewAccountForm,
};

fn fill(widget: &mut NewAccountForm, values: &[(&str, &str)]) {
    for (field, value) in values {
        widget.dispatch(FormEvent::input(*field, *value)).unwrap();
    }
}

const VALID: [(&str, &str); 4] = [
    ("name", "Ana"),
    ("email", "ana@x.com"),
    ("password", "Abcdef1"),
    ("confirmPassword", "Abcdef1"),
];

#[test]
fn test_dispatch_before_init() {
    let mut widget = NewAccountForm::default();
    let err = widget.dispatch(FormEvent::Submit).unwrap_err();
    assert!(matches!(err, WidgetError::NotInitialized));
}

#[test]
fn test_init_twice() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    assert!(matches!(
        widget.init().unwrap_err(),
        WidgetError::AlreadyInitialized
    ));
}

#[test]
fn test_init_binds_listeners() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    let bindings = widget.bindings();
    for field in FieldName::ALL {
        assert!(bindings.contains(&Binding::Keyup(field)));
    }
    assert!(bindings.contains(&Binding::Blur(FieldName::Email)));
    assert!(bindings.contains(&Binding::Submit));
    assert!(!widget.is_submit_enabled());
}

#[test]
fn test_end_to_end_valid_form() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    fill(&mut widget, &VALID);
    assert!(widget.is_submit_enabled());

    let update = widget.dispatch(FormEvent::Submit).unwrap().unwrap();
    let accepted = update.accepted.unwrap();
    assert_eq!(accepted.name, "Ana");
    assert_eq!(accepted.confirm_password, "Abcdef1");
    assert_eq!(update.feedback.name, None);
}

#[test]
fn test_submit_blocked_shows_required_messages() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();

    let update = widget.dispatch(FormEvent::Submit).unwrap().unwrap();
    assert!(update.accepted.is_none());
    assert!(!update.submit_enabled);
    assert_eq!(update.feedback.name, Some(NAME_REQUIRED));
    assert_eq!(update.feedback.email, Some(EMAIL_REQUIRED));
    assert_eq!(update.feedback.confirm_password, Some(CONFIRM_PASSWORD_REQUIRED));
}

#[test]
fn test_submit_reports_mismatch() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    fill(&mut widget, &[("password", "Abcdef1"), ("confirmPassword", "Abcdef2")]);

    let update = widget.dispatch(FormEvent::Submit).unwrap().unwrap();
    assert_eq!(update.feedback.confirm_password, Some(CONFIRM_PASSWORD_MATCH));
}

#[test]
fn test_confirmation_rechecked_when_password_changes() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    fill(&mut widget, &VALID);
    assert!(widget.is_submit_enabled());

    fill(&mut widget, &[("password", "Abcdef2")]);
    assert!(!widget.is_submit_enabled());
    assert!(widget.form().unwrap().error("confirmPassword", kind::MATCH_CONFIRMATION));

    fill(&mut widget, &[("password", "Abcdef1")]);
    assert!(widget.is_submit_enabled());
}

#[test]
fn test_email_blur_shows_format_error() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    fill(&mut widget, &[("email", "not-an-email")]);

    let update = widget.dispatch(FormEvent::blur("email")).unwrap().unwrap();
    assert_eq!(update.feedback.email, Some(EMAIL_FORMAT));

    fill(&mut widget, &[("email", "ana@x.com")]);
    let update = widget.dispatch(FormEvent::blur("email")).unwrap().unwrap();
    assert_eq!(update.feedback.email, None);
}

#[test]
fn test_unbound_events_are_ignored() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    assert!(widget.dispatch(FormEvent::blur("name")).unwrap().is_none());
    assert!(widget.dispatch(FormEvent::input("nickname", "x")).unwrap().is_none());
}

#[test]
fn test_password_feedback_flags() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();

    fill(&mut widget, &[("password", "abc")]);
    let password = &widget.feedback().password;
    assert!(password.length_error);
    assert!(password.capital_case_error);
    assert!(password.number_error);

    fill(&mut widget, &[("password", "Abcdef1")]);
    assert!(widget.feedback().password.is_strong());
}

#[test]
fn test_password_feedback_labels_follow_rules() {
    let mut widget = NewAccountForm::new(FormConfig::default().min_password_length(8));
    widget.init().unwrap();
    fill(&mut widget, &[("password", "abcdefgh1")]);

    let items = widget.feedback().password.items();
    assert_eq!(items[0], ("At least 8 characters".to_string(), false));
    assert_eq!(items[1], ("At least one capital letter".to_string(), true));
    assert_eq!(items[2], ("At least one number".to_string(), false));
}

#[test]
fn test_password_checklist_after_init() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();

    let password = &widget.feedback().password;
    assert!(!password.is_strong());
    let items = password.items();
    assert_eq!(items[0], ("At least 6 characters".to_string(), true));
    assert_eq!(items[1], ("At least one capital letter".to_string(), true));
    assert_eq!(items[2], ("At least one number".to_string(), true));
}

#[test]
fn test_password_checklist_reset_on_dispose() {
    let mut widget = NewAccountForm::new(FormConfig::default().min_password_length(8));
    widget.init().unwrap();
    fill(&mut widget, &[("password", "Abcdefgh1")]);
    assert!(widget.feedback().password.is_strong());

    widget.dispose();
    let password = &widget.feedback().password;
    assert_eq!(password.min_length, 8);
    assert!(password.length_error);
    assert!(!password.is_strong());
}

#[test]
fn test_subscribers_receive_updates() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = widget.subscribe(move |update| sink.lock().unwrap().push(update.submit_enabled));

    fill(&mut widget, &VALID);
    assert_eq!(*seen.lock().unwrap(), vec![false, false, false, true]);

    assert!(widget.unsubscribe(id));
    assert!(!widget.unsubscribe(id));
    fill(&mut widget, &[("name", "")]);
    assert_eq!(seen.lock().unwrap().len(), 4);
}

#[test]
fn test_dispose_releases_everything() {
    let mut widget = NewAccountForm::default();
    widget.init().unwrap();
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    widget.subscribe(move |_| *sink.lock().unwrap() += 1);

    widget.dispose();
    assert!(!widget.is_initialized());
    assert!(widget.bindings().is_empty());
    assert!(widget.form().is_none());
    assert!(widget.value().unwrap().is_none());
    assert!(matches!(
        widget.dispatch(FormEvent::Submit).unwrap_err(),
        WidgetError::NotInitialized
    ));

    widget.init().unwrap();
    fill(&mut widget, &[("name", "Ana")]);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_seeded_value_survives_init() {
    let mut widget = NewAccountForm::default();
    let snapshot = FormSnapshot {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        password: "Abcdef1".to_string(),
        confirm_password: "Abcdef1".to_string(),
    };
    widget.set_value(&snapshot.to_json().unwrap()).unwrap();
    widget.init().unwrap();

    assert!(widget.is_submit_enabled());
    let value = widget.value().unwrap().unwrap();
    assert_eq!(FormSnapshot::from_json(&value).unwrap(), snapshot);
}

#[test]
fn test_seeded_mismatch_is_invalid() {
    let mut widget = NewAccountForm::default();
    widget
        .set_value(
            r#"{"name":"Ana","email":"ana@x.com","password":"Abcdef1","confirmPassword":"x"}"#,
        )
        .unwrap();
    widget.init().unwrap();
    assert!(!widget.is_submit_enabled());
}

#[test]
fn test_set_value_rejects_bad_json() {
    let mut widget = NewAccountForm::default();
    assert!(matches!(
        widget.set_value("{").unwrap_err(),
        WidgetError::Snapshot(_)
    ));
    assert!(widget.form().is_none());
}
