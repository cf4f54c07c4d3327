//! # Session storage for the sign-in state
//!
//! The login redirect reloads the page, so the PKCE verifier, the signed-in
//! account and the token cache have to outlive the wasm instance that wrote
//! them. They live in a [`SessionStore`]: the browser's `sessionStorage` on
//! wasm32 ([`BrowserSession`]) and a process-local map elsewhere
//! ([`MemorySession`]). Values are JSON strings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key for the signed-in account.
pub const SESSION_ACCOUNT_KEY: &str = "careerlog.account";
/// Key for the cached token set.
pub const SESSION_TOKEN_KEY: &str = "careerlog.token";
/// Key for the state and PKCE verifier of a login in flight.
pub const SESSION_PENDING_LOGIN_KEY: &str = "careerlog.pending_login";

/// String key/value storage scoped to the browser tab.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Read and decode a JSON value. Undecodable entries are dropped.
pub fn load<T: DeserializeOwned>(store: &dyn SessionStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Discarding unreadable session entry {}: {}", key, e);
            store.remove(key);
            None
        }
    }
}

pub fn save<T: Serialize>(store: &dyn SessionStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => tracing::error!("Failed to encode session entry {}: {}", key, e),
    }
}

/// In-memory SessionStore for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// SessionStore backed by `window.sessionStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct BrowserSession;

#[cfg(target_arch = "wasm32")]
impl BrowserSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::error!("sessionStorage rejected {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
