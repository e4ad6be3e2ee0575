//! Submission state for the signup and signin forms.
//!
//! DESIGN
//! ======
//! `Idle` accepts a submit; validation failures stay in `Idle` with inline
//! errors; a valid submit moves to `Submitting` until the request settles;
//! success moves to `Redirecting` while the success message is shown.
//! Failures return to `Idle` with the API error and keep the inputs.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::http::ApiError;
use crate::util::validate::FormErrors;

pub const SIGNUP_SUCCESS: &str = "Signup successful! Redirecting...";
pub const SIGNIN_SUCCESS: &str = "Login successful! Redirecting...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Redirecting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub phase: FormPhase,
    pub errors: FormErrors,
    pub success_message: Option<String>,
}

impl FormState {
    /// True while a request is in flight or a redirect is pending. The submit
    /// control is disabled and further submits are ignored.
    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    /// Apply a validation pass. Returns `true` when the request should be
    /// sent.
    pub fn begin_submit(&mut self, errors: FormErrors) -> bool {
        if self.is_busy() {
            return false;
        }
        self.success_message = None;
        if errors.is_empty() {
            self.errors = FormErrors::default();
            self.phase = FormPhase::Submitting;
            true
        } else {
            self.errors = errors;
            false
        }
    }

    pub fn succeed(&mut self, message: &str) {
        self.phase = FormPhase::Redirecting;
        self.success_message = Some(message.to_owned());
    }

    pub fn fail(&mut self, error: &ApiError) {
        self.phase = FormPhase::Idle;
        self.errors = FormErrors { api: Some(error.to_string()), ..FormErrors::default() };
    }
}
