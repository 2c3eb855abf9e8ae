//! Bearer credential storage and the session context built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential is the only shared mutable resource in the client. It is
//! written on login/logout and cleared by the API client's auth-failure path.
//! Components never touch `localStorage` directly; they go through a
//! [`Session`] provided via context.
//!
//! TRADE-OFFS
//! ==========
//! No expiry tracking or refresh token. Presence means "try it", not "valid";
//! the server decides validity on the first authenticated call. Across tabs
//! `localStorage` gives last-writer-wins semantics.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::sync::{Arc, Mutex, PoisonError};

const BEARER_SCHEME: &str = "Bearer";

/// Persistent single-slot storage for the bearer token.
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any.
    fn read(&self) -> Option<String>;
    /// Replace the stored token.
    fn save(&self, token: &str);
    /// Remove the stored token. Safe to call when nothing is stored.
    fn clear(&self);
}

/// Browser `localStorage` credential slot.
///
/// Outside the browser (SSR, native tests) every operation is a no-op and
/// `read` reports no credential.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageCredentials {
    key: &'static str,
}

impl LocalStorageCredentials {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl CredentialStore for LocalStorageCredentials {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; credential not persisted");
                return;
            };
            warn_on_storage_error("persist", storage.set_item(self.key, token));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                warn_on_storage_error("clear", storage.remove_item(self.key));
            }
        }
    }
}

/// Log a failed `localStorage` write. Returns whether the write succeeded.
#[cfg(any(feature = "hydrate", test))]
fn warn_on_storage_error<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("failed to {action} credential in localStorage: {err:?}");
            false
        }
    }
}

/// In-memory credential slot for tests and non-browser builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentials {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl CredentialStore for MemoryCredentials {
    fn read(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

/// Session context injected into the API client, resolver and route guard.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session backed by browser `localStorage` under `key`.
    pub fn browser(key: &'static str) -> Self {
        Self::new(LocalStorageCredentials::new(key))
    }

    /// The stored token without any bearer scheme; blank counts as absent.
    pub fn token(&self) -> Option<String> {
        let raw = self.store.read()?;
        let token = strip_bearer(&raw);
        if token.is_empty() {
            return None;
        }
        Some(token.to_owned())
    }

    /// Credential presence, not validity.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header value for the stored credential.
    pub fn bearer(&self) -> Option<String> {
        self.token().as_deref().and_then(bearer_header_value)
    }

    pub fn save(&self, token: &str) {
        self.store.save(token.trim());
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Format `token` as a bearer header value, never doubling the scheme.
pub fn bearer_header_value(token: &str) -> Option<String> {
    let raw = strip_bearer(token);
    if raw.is_empty() {
        return None;
    }
    Some(format!("{BEARER_SCHEME} {raw}"))
}

/// Token with any leading `bearer` scheme word removed and whitespace trimmed.
///
/// The scheme only counts when followed by whitespace or the end of input, so
/// `"Bearer"` alone strips to `""` while `"Bearerish"` is kept.
pub fn strip_bearer(token: &str) -> &str {
    let trimmed = token.trim();
    let Some(head) = trimmed.get(..BEARER_SCHEME.len()) else {
        return trimmed;
    };
    if !head.eq_ignore_ascii_case(BEARER_SCHEME) {
        return trimmed;
    }
    let rest = &trimmed[BEARER_SCHEME.len()..];
    match rest.chars().next() {
        None => "",
        Some(c) if c.is_whitespace() => rest.trim(),
        Some(_) => trimmed,
    }
}
