use super::*;
use crate::util::validate::{NAME_REQUIRED, validate_signup};

#[test]
fn default_form_is_idle_and_clean() {
    let state = FormState::default();
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(state.errors.is_empty());
    assert_eq!(state.success_message, None);
    assert!(!state.is_busy());
}

#[test]
fn invalid_submit_stays_idle_with_errors() {
    let mut state = FormState::default();
    let proceed = state.begin_submit(validate_signup("a@b.com", "", "Abcdef1!"));
    assert!(!proceed);
    assert_eq!(state.phase, FormPhase::Idle);
    assert_eq!(state.errors.name.as_deref(), Some(NAME_REQUIRED));
}

#[test]
fn valid_submit_enters_submitting_and_clears_errors() {
    let mut state = FormState::default();
    state.fail(&ApiError::Network);
    let proceed = state.begin_submit(validate_signup("a@b.com", "Jo", "Abcdef1!"));
    assert!(proceed);
    assert_eq!(state.phase, FormPhase::Submitting);
    assert!(state.errors.is_empty());
    assert!(state.is_busy());
}

#[test]
fn busy_form_ignores_second_submit() {
    let mut state = FormState::default();
    assert!(state.begin_submit(FormErrors::default()));
    assert!(!state.begin_submit(FormErrors::default()));
    assert_eq!(state.phase, FormPhase::Submitting);
}

#[test]
fn success_moves_to_redirecting_with_message() {
    let mut state = FormState::default();
    state.begin_submit(FormErrors::default());
    state.succeed(SIGNUP_SUCCESS);
    assert_eq!(state.phase, FormPhase::Redirecting);
    assert_eq!(state.success_message.as_deref(), Some("Signup successful! Redirecting..."));
    assert!(state.is_busy());
}

#[test]
fn failure_returns_to_idle_with_api_message() {
    let mut state = FormState::default();
    state.begin_submit(FormErrors::default());
    state.fail(&ApiError::Application("Email already registered".to_owned()));
    assert_eq!(state.phase, FormPhase::Idle);
    assert_eq!(state.errors.api.as_deref(), Some("Email already registered"));
    assert!(state.errors.email.is_none());
}

#[test]
fn new_validation_pass_clears_stale_success_message() {
    let mut state = FormState { success_message: Some("old".to_owned()), ..FormState::default() };
    state.begin_submit(validate_signup("", "", ""));
    assert_eq!(state.success_message, None);
}
