//! HTTP client shared by every API call.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` type serves both the plain auth endpoints and authenticated
//! calls. The difference is its `AuthPolicy`: `Bearer` attaches the stored
//! token and treats a 401 as a signed-out session. Requests go through an
//! injected `Transport` so flows can be driven by a scripted backend.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success outcome is returned as an `ApiError`. A 401 on a bearer
//! client clears the token and returns `ApiError::Unauthenticated`; turning
//! that into navigation is the routing layer's job (`util::auth`).

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::config::join_url;
use crate::state::session::Session;

pub const NETWORK_ERROR: &str = "Network error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully-resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below HTTP: nothing usable came back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Failed(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport not available outside the browser")]
    Unavailable,
}

/// Sends one request and returns whatever status the server produced.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Perform the exchange.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Errors surfaced to API callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request with a readable message.
    #[error("{0}")]
    Application(String),
    /// No response, or a failure response without a usable message.
    #[error("Network error")]
    Network,
    /// A bearer client received 401; the stored token has been cleared.
    #[error("Session expired. Please sign in again.")]
    Unauthenticated,
    /// Non-success status from a bearer client, passed through as received.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    #[error("request encoding failed: {0}")]
    Encode(String),
}

/// How a client authenticates outgoing requests.
#[derive(Clone, Debug, Default)]
pub enum AuthPolicy {
    #[default]
    None,
    /// Attach `Authorization: Bearer <token>` when the session holds a token.
    Bearer(Session),
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Option<Duration>,
    auth: AuthPolicy,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            timeout: None,
            auth: AuthPolicy::None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_auth(mut self, auth: AuthPolicy) -> Self {
        self.auth = auth;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the response if its status is 2xx.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] when the transport fails or times out.
    /// - [`ApiError::Unauthenticated`] on 401 from a bearer client, after the
    ///   stored token is removed.
    /// - [`ApiError::Status`] for any other non-2xx response.
    pub async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<HttpResponse, ApiError> {
        self.dispatch(method, path, body.map(Value::to_string)).await
    }

    /// POST a JSON body and return the decoded JSON response.
    ///
    /// An empty success body decodes to `null`; a non-JSON success body is
    /// returned as a JSON string.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Application`] when a failure response carries a
    ///   `message` field.
    /// - [`ApiError::Network`] for a failure response without one, or when
    ///   no response arrives.
    /// - [`ApiError::Unauthenticated`] on 401 from a bearer client.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        match self.dispatch(Method::Post, path, Some(raw)).await {
            Ok(response) => Ok(decode_success_body(&response.body)),
            Err(ApiError::Status { body, .. }) => Err(error_from_failure_body(&body)),
            Err(e) => Err(e),
        }
    }

    async fn dispatch(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body);
        let url = request.url.clone();
        let response = self.transport.send(request).await.map_err(|e| {
            leptos::logging::warn!("{url}: {e}");
            ApiError::Network
        })?;

        if response.is_success() {
            return Ok(response);
        }
        if response.status == 401 {
            if let AuthPolicy::Bearer(session) = &self.auth {
                leptos::logging::warn!("{url}: 401, clearing stored token");
                session.clear_token();
                return Err(ApiError::Unauthenticated);
            }
        }
        Err(ApiError::Status { status: response.status, body: response.body })
    }

    fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let AuthPolicy::Bearer(session) = &self.auth {
            if let Some(token) = session.token() {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }
        HttpRequest {
            method,
            url: join_url(&self.base_url, path),
            headers,
            body,
            timeout: self.timeout,
        }
    }
}

fn decode_success_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

/// Prefer the server's `message`; fall back to the generic network error.
fn error_from_failure_body(body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .map(|v| v.get("message").and_then(Value::as_str).map(str::to_owned));
    match message {
        Ok(Some(message)) if !message.trim().is_empty() => ApiError::Application(message),
        _ => ApiError::Network,
    }
}
