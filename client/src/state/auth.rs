//! Per-component view of the resolved user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header and profile page each hold their own `RwSignal<AuthState>` and
//! fill it from `SessionResolver::resolve_current_user`. Nothing is shared
//! through context, so each consumer re-resolves on mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::SessionError;
use crate::net::types::UserIdentity;

/// Resolution progress and result for one consumer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
    /// Inline message when resolution failed.
    pub error: Option<String>,
}

impl AuthState {
    pub fn loading() -> Self {
        Self { user: None, loading: true, error: None }
    }

    /// Settle the state from a resolver result.
    pub fn settled(result: Result<UserIdentity, SessionError>) -> Self {
        match result {
            Ok(user) => Self { user: Some(user), loading: false, error: None },
            Err(SessionError::NoCredential) => Self { user: None, loading: false, error: None },
            Err(SessionError::ProfileUnavailable) => Self {
                user: None,
                loading: false,
                error: Some("Failed to load profile data.".to_owned()),
            },
        }
    }

    /// Header label; `"User"` until something better is known.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "User".to_owned(), |u| u.name.clone())
    }
}
