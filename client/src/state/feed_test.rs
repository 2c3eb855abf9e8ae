use super::*;

#[test]
fn default_is_loading_and_empty() {
    let feed = FeedState::<u8>::default();
    assert!(feed.loading);
    assert!(feed.items.is_empty());
    assert!(!feed.is_empty());
}

#[test]
fn settle_ok_replaces_items() {
    let mut feed = FeedState::default();
    feed.settle(Ok(vec![1, 2]), "Failed");
    assert_eq!(feed.items, vec![1, 2]);
    assert!(!feed.loading);
    assert_eq!(feed.error, None);
}

#[test]
fn settle_err_keeps_items_and_prefers_server_message() {
    let mut feed = FeedState { items: vec![7], loading: false, error: None };
    feed.begin();
    feed.settle(
        Err(ApiError::Server { status: 500, message: Some("db down".to_owned()) }),
        "Failed to load",
    );
    assert_eq!(feed.items, vec![7]);
    assert_eq!(feed.error.as_deref(), Some("db down"));
}

#[test]
fn settle_err_without_message_uses_fallback() {
    let mut feed = FeedState::<u8>::default();
    feed.settle(Err(ApiError::Network("offline".to_owned())), "Failed to load");
    assert_eq!(feed.error.as_deref(), Some("Failed to load"));
    assert!(feed.is_empty());
}
