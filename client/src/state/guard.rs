//! Route-guard state machine for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route` owns one [`GuardState`] per mount. The check
//! is credential presence only; validity is discovered by the first API call
//! and handled by the client's auth-failure policy.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Guard progress for one mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Before the credential check; nothing is rendered.
    #[default]
    Pending,
    Resolved {
        authorized: bool,
    },
}

/// What the guard component should do for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    RenderNothing,
    RenderProtected,
    RedirectToLogin,
}

impl GuardState {
    /// Resolve from `Pending`. Already-resolved states are left unchanged,
    /// so a mount transitions exactly once.
    #[must_use]
    pub fn resolve(self, has_credential: bool) -> Self {
        match self {
            Self::Pending => Self::Resolved { authorized: has_credential },
            resolved @ Self::Resolved { .. } => resolved,
        }
    }

    pub fn outcome(self) -> GuardOutcome {
        match self {
            Self::Pending => GuardOutcome::RenderNothing,
            Self::Resolved { authorized: true } => GuardOutcome::RenderProtected,
            Self::Resolved { authorized: false } => GuardOutcome::RedirectToLogin,
        }
    }
}
