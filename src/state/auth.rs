//! Signup, signin and logout steps independent of the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own signals, timers and navigation; these functions own the
//! validate -> request -> persist sequence so it can run against a scripted
//! transport and in-memory storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api;
use crate::net::http::{ApiClient, ApiError};
use crate::net::types::{LoginRequest, RegistrationRequest};
use crate::state::session::{Session, SessionRecord};
use crate::util::validate::{FormErrors, validate_signin, validate_signup};

/// Raw signup form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl SignupInput {
    pub fn validate(&self) -> FormErrors {
        validate_signup(&self.email, &self.name, &self.password)
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Raw signin form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

impl SigninInput {
    pub fn validate(&self) -> FormErrors {
        validate_signin(&self.email, &self.password)
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Register and persist the response as the session record. Any token left
/// by a previous session is removed.
///
/// # Errors
///
/// Returns the [`ApiError`] from the registration call; nothing is persisted.
pub async fn submit_signup(
    client: &ApiClient,
    session: &Session,
    request: &RegistrationRequest,
) -> Result<SessionRecord, ApiError> {
    let record = SessionRecord::new(api::register(client, request).await?);
    session.replace(&record, None);
    Ok(record)
}

/// Log in, persist the response as the session record and store its access
/// token for the bearer client.
///
/// # Errors
///
/// Returns the [`ApiError`] from the login call; nothing is persisted.
pub async fn submit_signin(client: &ApiClient, session: &Session, request: &LoginRequest) -> Result<SessionRecord, ApiError> {
    let record = SessionRecord::new(api::login(client, request).await?);
    session.replace(&record, record.access_token());
    Ok(record)
}

/// Local-only logout: every persisted key is removed. The backend is not
/// notified.
pub fn logout(session: &Session) {
    session.clear_all();
}

/// What the dashboard shows for the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub record: SessionRecord,
}

impl AuthState {
    pub fn load(session: &Session) -> Self {
        Self { record: session.load_record() }
    }

    /// The user's email, blank when the session has none.
    pub fn email(&self) -> String {
        self.record.email().unwrap_or_default().to_owned()
    }
}
