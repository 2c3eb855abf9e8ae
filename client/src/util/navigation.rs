//! Hard navigation helpers and route constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Soft, in-app navigation goes through `leptos_router`. The auth-failure path
//! and logout instead perform a full page navigation so every component's
//! state is torn down together with the evicted credential.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Public login route.
pub const LOGIN_PATH: &str = "/login";

/// Query marker the login page reads to show the "session expired" notice.
pub const SESSION_EXPIRED_PARAM: &str = "session_expired";

/// Target of the global 401/403 policy.
pub const SESSION_EXPIRED_PATH: &str = "/login?session_expired=true";

/// Full-page navigation seam. Tests substitute a recorder.
pub trait Navigator: Send + Sync {
    /// Replace the current document with `target`.
    fn assign(&self, target: &str);
}

/// Navigates by setting `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn assign(&self, target: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(target) {
                    log::error!("navigation to {target} failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    }
}

/// Whether a query string (with or without leading `?`) carries the
/// session-expired marker set to `true`.
pub fn is_session_expired_query(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == SESSION_EXPIRED_PARAM && value == "true")
}
