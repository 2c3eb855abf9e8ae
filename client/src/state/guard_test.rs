use super::*;
use crate::state::credential::{MemoryCredentials, Session};

#[test]
fn pending_renders_nothing() {
    assert_eq!(GuardState::default(), GuardState::Pending);
    assert_eq!(GuardState::Pending.outcome(), GuardOutcome::RenderNothing);
}

#[test]
fn credential_present_renders_protected_content() {
    let session = Session::new(MemoryCredentials::with_token("t"));
    let state = GuardState::Pending.resolve(session.is_authenticated());
    assert_eq!(state, GuardState::Resolved { authorized: true });
    assert_eq!(state.outcome(), GuardOutcome::RenderProtected);
}

#[test]
fn credential_absent_redirects() {
    let session = Session::new(MemoryCredentials::new());
    let state = GuardState::Pending.resolve(session.is_authenticated());
    assert_eq!(state, GuardState::Resolved { authorized: false });
    assert_eq!(state.outcome(), GuardOutcome::RedirectToLogin);
}

#[test]
fn resolution_happens_once_per_mount() {
    let state = GuardState::Pending.resolve(false).resolve(true);
    assert_eq!(state.outcome(), GuardOutcome::RedirectToLogin);
}

#[test]
fn no_protected_render_before_resolution() {
    let outcomes: Vec<_> = [GuardState::Pending, GuardState::Pending.resolve(false)]
        .into_iter()
        .map(GuardState::outcome)
        .collect();
    assert!(!outcomes.contains(&GuardOutcome::RenderProtected));
}
