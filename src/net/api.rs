//! Auth API calls and client construction.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `ApiError`; pages render its `Display` text in the form
//! banner and never propagate it further.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde_json::Value;

use super::http::{ApiClient, ApiError, AuthPolicy, Transport};
use super::types::{LoginRequest, RegistrationRequest};
use crate::config::{AppConfig, LOGIN_PATH, REGISTRATION_PATH};
use crate::state::session::Session;

/// The two client variants the app uses, shared through context.
#[derive(Clone, Debug)]
pub struct ApiClients {
    /// Unauthenticated client for the auth endpoints.
    pub auth: ApiClient,
    /// Bearer client for calls made on behalf of the signed-in user.
    pub authed: ApiClient,
}

impl ApiClients {
    pub fn new(config: &AppConfig, transport: Arc<dyn Transport>, session: &Session) -> Self {
        Self {
            auth: ApiClient::new(Arc::clone(&transport), config.api_base_url.clone()),
            authed: ApiClient::new(transport, config.authed_base_url.clone())
                .with_timeout(config.request_timeout)
                .with_auth(AuthPolicy::Bearer(session.clone())),
        }
    }
}

/// Create an account via `POST /auth/register`.
///
/// Returns the response body unchanged.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the server's message, or the generic
/// network error.
pub async fn register(client: &ApiClient, request: &RegistrationRequest) -> Result<Value, ApiError> {
    client.post_json(REGISTRATION_PATH, request).await
}

/// Sign in via `POST /auth/login`.
///
/// Returns the response body unchanged.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the server's message, or the generic
/// network error.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Value, ApiError> {
    client.post_json(LOGIN_PATH, request).await
}
