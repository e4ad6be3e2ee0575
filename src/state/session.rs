//! Client-side session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The logged-in user's session record and bearer token live in a key-value
//! store. Pages receive a `Session` handle through Leptos context instead of
//! touching `localStorage` directly, so flows can run against
//! `MemoryStorage` in tests.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and degrade to "no session": reads return
//! absent values and writes are dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Key holding the serialized session record.
pub const USER_KEY: &str = "user";
/// Key holding the bearer token string.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Plain-string key-value storage.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be reached.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process storage used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl SessionStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.items()?.clear();
        Ok(())
    }
}

/// Browser `localStorage`, looked up on each call.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .clear()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// The persisted record of a logged-in user, kept exactly as the backend
/// returned it.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionRecord(Value);

impl Default for SessionRecord {
    fn default() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }
}

impl SessionRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a stored record. Anything other than a JSON object yields an
    /// empty record.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value @ Value::Object(_)) => Self(value),
            _ => Self::default(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// `userInfo.email`, if present.
    pub fn email(&self) -> Option<&str> {
        self.0.get("userInfo")?.get("email")?.as_str()
    }

    /// `accessToken`, if present.
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("accessToken")?.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_object().is_none_or(serde_json::Map::is_empty)
    }
}

/// Shared handle over the injected store with typed session operations.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session over the browser's `localStorage`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Session over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Replace the stored session record.
    pub fn save_record(&self, record: &SessionRecord) {
        let raw = record.as_value().to_string();
        if let Err(e) = self.store.set(USER_KEY, &raw) {
            leptos::logging::warn!("session record not saved: {e}");
        }
    }

    /// Start a new session: the record and token replace whatever the
    /// previous session left behind. `None` removes any stored token.
    pub fn replace(&self, record: &SessionRecord, token: Option<&str>) {
        self.save_record(record);
        match token {
            Some(token) => self.set_token(token),
            None => self.clear_token(),
        }
    }

    /// Load the stored session record, or an empty one when absent or
    /// malformed.
    pub fn load_record(&self) -> SessionRecord {
        match self.store.get(USER_KEY) {
            Ok(Some(raw)) => SessionRecord::parse(&raw),
            Ok(None) => SessionRecord::default(),
            Err(e) => {
                leptos::logging::warn!("session record not readable: {e}");
                SessionRecord::default()
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                leptos::logging::warn!("token not readable: {e}");
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.store.set(TOKEN_KEY, token) {
            leptos::logging::warn!("token not saved: {e}");
        }
    }

    pub fn clear_token(&self) {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            leptos::logging::warn!("token not removed: {e}");
        }
    }

    /// Remove every persisted key.
    pub fn clear_all(&self) {
        if let Err(e) = self.store.clear() {
            leptos::logging::warn!("session not cleared: {e}");
        }
    }
}
