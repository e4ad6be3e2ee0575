//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment at runtime, so settings are
//! captured with `option_env!` when the crate is compiled and parsed into a
//! typed `AppConfig` once at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Registration endpoint, relative to the unauthenticated base URL.
pub const REGISTRATION_PATH: &str = "/auth/register";
/// Login endpoint, relative to the unauthenticated base URL.
pub const LOGIN_PATH: &str = "/auth/login";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Typed application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the unauthenticated auth API (`APP_BASE_URI`).
    pub api_base_url: String,
    /// Base URL of the authenticated API (`APP_BASE_URL`).
    pub authed_base_url: String,
    /// Timeout applied by the authenticated client.
    pub request_timeout: Duration,
    /// Pause between a successful submit and the dashboard redirect.
    pub redirect_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            authed_base_url: String::new(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `APP_BASE_URI`: unauthenticated API base, default same-origin
    /// - `APP_BASE_URL`: authenticated API base, default same-origin
    /// - `APP_REQUEST_TIMEOUT_MS`: default 5000
    /// - `APP_REDIRECT_DELAY_MS`: default 800
    ///
    /// A malformed number falls back to its own default with a warning;
    /// the other settings are kept.
    pub fn from_build_env() -> Self {
        Self::resolve(&RawConfig {
            api_base_url: option_env!("APP_BASE_URI"),
            authed_base_url: option_env!("APP_BASE_URL"),
            request_timeout_ms: option_env!("APP_REQUEST_TIMEOUT_MS"),
            redirect_delay_ms: option_env!("APP_REDIRECT_DELAY_MS"),
        })
    }

    /// Like [`AppConfig::parse`], but each malformed duration is replaced by
    /// its default instead of failing the whole config.
    pub fn resolve(raw: &RawConfig<'_>) -> Self {
        Self {
            api_base_url: normalize_base_url(raw.api_base_url),
            authed_base_url: normalize_base_url(raw.authed_base_url),
            request_timeout: millis_or_default("APP_REQUEST_TIMEOUT_MS", raw.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS),
            redirect_delay: millis_or_default("APP_REDIRECT_DELAY_MS", raw.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS),
        }
    }

    /// Parse raw string settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a duration setting is not
    /// a non-negative integer.
    pub fn parse(raw: &RawConfig<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(raw.api_base_url),
            authed_base_url: normalize_base_url(raw.authed_base_url),
            request_timeout: parse_millis("APP_REQUEST_TIMEOUT_MS", raw.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS)?,
            redirect_delay: parse_millis("APP_REDIRECT_DELAY_MS", raw.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS)?,
        })
    }
}

/// Unparsed settings as captured from the build environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub api_base_url: Option<&'a str>,
    pub authed_base_url: Option<&'a str>,
    pub request_timeout_ms: Option<&'a str>,
    pub redirect_delay_ms: Option<&'a str>,
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().trim_end_matches('/').to_owned()
}

fn parse_millis(key: &'static str, raw: Option<&str>, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(Duration::from_millis(default));
    };
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidNumber { key, value: value.to_owned() })
}

fn millis_or_default(key: &'static str, raw: Option<&str>, default: u64) -> Duration {
    parse_millis(key, raw, default).unwrap_or_else(|e| {
        leptos::logging::warn!("invalid build config, using default: {e}");
        Duration::from_millis(default)
    })
}

/// Join a base URL and an absolute endpoint path.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
