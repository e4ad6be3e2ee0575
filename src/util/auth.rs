//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer client reports a rejected token as `ApiError::Unauthenticated`
//! instead of navigating itself. Any page making an authenticated call passes
//! the result through here so every route reacts the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::app::LOGIN_ROUTE;
use crate::net::http::ApiError;

pub fn is_unauthenticated<T>(result: &Result<T, ApiError>) -> bool {
    matches!(result, Err(ApiError::Unauthenticated))
}

/// Navigate to the login route when `result` is `Unauthenticated`.
///
/// The result is returned unchanged so the caller still sees the error.
pub fn redirect_on_unauthenticated<T, F>(result: Result<T, ApiError>, navigate: F) -> Result<T, ApiError>
where
    F: FnOnce(&str, NavigateOptions),
{
    if is_unauthenticated(&result) {
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    }
    result
}
