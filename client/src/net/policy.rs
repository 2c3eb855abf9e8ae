//! Global reaction to authorization failures.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client evicts the credential and then hands control to an
//! [`AuthFailurePolicy`] for every 401/403, regardless of which endpoint or
//! component issued the call. The browser app installs
//! [`SessionExpiredRedirect`]; tests install a recorder or [`IgnoreAuthFailure`].

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::util::navigation::{LocationNavigator, Navigator, SESSION_EXPIRED_PATH};

/// Hook run after the credential has been cleared on a 401/403.
pub trait AuthFailurePolicy: Send + Sync {
    fn on_auth_failure(&self, status: u16);
}

/// Force a full navigation to the login page with the session-expired marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionExpiredRedirect<N = LocationNavigator> {
    navigator: N,
}

impl<N: Navigator> SessionExpiredRedirect<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }
}

impl<N: Navigator> AuthFailurePolicy for SessionExpiredRedirect<N> {
    fn on_auth_failure(&self, status: u16) {
        log::warn!("unauthorized ({status}); clearing credential and redirecting to login");
        self.navigator.assign(SESSION_EXPIRED_PATH);
    }
}

/// Leave navigation alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreAuthFailure;

impl AuthFailurePolicy for IgnoreAuthFailure {
    fn on_auth_failure(&self, _status: u16) {}
}
