use super::*;

// =============================================================
// Bearer formatting
// =============================================================

#[test]
fn bearer_header_value_prefixes_plain_token() {
    assert_eq!(bearer_header_value("abc.def.ghi"), Some("Bearer abc.def.ghi".to_owned()));
}

#[test]
fn bearer_header_value_trims_whitespace() {
    assert_eq!(bearer_header_value("  abc \n"), Some("Bearer abc".to_owned()));
}

#[test]
fn bearer_header_value_does_not_double_prefix() {
    assert_eq!(bearer_header_value("Bearer abc"), Some("Bearer abc".to_owned()));
    assert_eq!(bearer_header_value("bearer   abc"), Some("Bearer abc".to_owned()));
}

#[test]
fn bearer_header_value_rejects_blank() {
    assert_eq!(bearer_header_value("   "), None);
    assert_eq!(bearer_header_value("Bearer "), None);
}

#[test]
fn bearer_header_value_accepts_any_whitespace_after_scheme() {
    assert_eq!(bearer_header_value("Bearer\tabc"), Some("Bearer abc".to_owned()));
    assert_eq!(bearer_header_value("BEARER\nabc"), Some("Bearer abc".to_owned()));
}

#[test]
fn strip_bearer_leaves_short_tokens_alone() {
    assert_eq!(strip_bearer("abc"), "abc");
    assert_eq!(strip_bearer("Bear"), "Bear");
}

#[test]
fn strip_bearer_only_matches_whole_scheme_word() {
    assert_eq!(strip_bearer("Bearer"), "");
    assert_eq!(strip_bearer("Bearerish.token"), "Bearerish.token");
}

// =============================================================
// MemoryCredentials / Session
// =============================================================

#[test]
fn memory_store_round_trips_and_clears() {
    let store = MemoryCredentials::new();
    assert_eq!(store.read(), None);
    store.save("t1");
    assert_eq!(store.read(), Some("t1".to_owned()));
    store.save("t2");
    assert_eq!(store.read(), Some("t2".to_owned()));
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn clear_is_idempotent() {
    let session = Session::new(MemoryCredentials::with_token("t"));
    session.clear();
    session.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn session_treats_blank_token_as_absent() {
    let session = Session::new(MemoryCredentials::with_token("   "));
    assert!(!session.is_authenticated());
    assert_eq!(session.bearer(), None);
}

#[test]
fn session_treats_bare_scheme_as_absent() {
    for stored in ["Bearer", "Bearer ", " bearer\t"] {
        let session = Session::new(MemoryCredentials::with_token(stored));
        assert!(!session.is_authenticated(), "{stored:?}");
        assert_eq!(session.bearer(), None);
    }
}

#[test]
fn session_token_drops_stored_scheme() {
    let session = Session::new(MemoryCredentials::with_token("Bearer\tabc"));
    assert_eq!(session.token(), Some("abc".to_owned()));
    assert_eq!(session.bearer(), Some("Bearer abc".to_owned()));
}

#[test]
fn storage_errors_are_reported() {
    assert!(warn_on_storage_error::<String>("persist", Ok(())));
    assert!(!warn_on_storage_error("persist", Err("QuotaExceededError")));
}

#[test]
fn session_shares_the_underlying_store() {
    let store = MemoryCredentials::new();
    let session = Session::new(store.clone());
    session.save(" tok ");
    assert_eq!(store.read(), Some("tok".to_owned()));
    assert_eq!(session.bearer(), Some("Bearer tok".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    let store = LocalStorageCredentials::new("token");
    store.save("ignored");
    assert_eq!(store.read(), None);
    store.clear();
}
