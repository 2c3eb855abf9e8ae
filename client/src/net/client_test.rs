use super::*;
use crate::net::policy::IgnoreAuthFailure;
use crate::net::transport::TransportError;
use crate::state::credential::CredentialStore;
use crate::test_helpers::{CountingPolicy, FakeTransport, RecordingNavigator, client_with};
use crate::util::navigation::SESSION_EXPIRED_PATH;
use std::time::Duration;

// =============================================================
// Outbound: credential attachment
// =============================================================

#[tokio::test]
async fn attaches_bearer_header_when_credential_present() {
    let transport = FakeTransport::new().respond(200, "[]");
    let (client, _) = client_with(Some("abc.def.ghi"), transport.clone(), IgnoreAuthFailure);

    client.get_json::<Vec<serde_json::Value>>("/api/attendance/me").await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header("Authorization"), Some("Bearer abc.def.ghi"));
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn stored_bearer_prefix_is_not_duplicated() {
    let transport = FakeTransport::new().respond(200, "{}");
    let (client, _) = client_with(Some("Bearer  abc "), transport.clone(), IgnoreAuthFailure);

    client.post_empty("/api/attendance/clock-in").await.unwrap();

    assert_eq!(transport.sent()[0].header("Authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn stored_scheme_variants_never_double_the_prefix() {
    for (stored, expected) in [("Bearer ", None), ("Bearer\tabc", Some("Bearer abc")), ("Bearer\nabc", Some("Bearer abc"))] {
        let transport = FakeTransport::new().respond(200, "{}");
        let (client, _) = client_with(Some(stored), transport.clone(), IgnoreAuthFailure);

        client.post_empty("/api/attendance/clock-in").await.unwrap();

        assert_eq!(transport.sent()[0].header("Authorization"), expected, "{stored:?}");
        assert_eq!(client.session().is_authenticated(), expected.is_some());
    }
}

#[tokio::test]
async fn no_credential_sends_without_authorization() {
    let transport = FakeTransport::new().respond(200, r#"{"token":"t"}"#);
    let (client, _) = client_with(None, transport.clone(), IgnoreAuthFailure);

    let body: serde_json::Value = client
        .post_json("/api/auth/login", &serde_json::json!({"email": "a@b.com", "password": "pw"}))
        .await
        .unwrap();

    assert_eq!(body["token"], "t");
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header("Authorization"), None);
}

#[tokio::test]
async fn multipart_requests_keep_transport_content_type() {
    let transport = FakeTransport::new().respond(200, "{}");
    let (client, _) = client_with(Some("t"), transport.clone(), IgnoreAuthFailure);
    let part = FilePart {
        field: "image".to_owned(),
        file_name: "me.png".to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![1, 2, 3],
    };

    client.post_multipart("/api/employees/7/uploadImage", vec![part]).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].header("Content-Type"), None);
    assert_eq!(sent[0].header("Authorization"), Some("Bearer t"));
    assert!(matches!(sent[0].body, Body::Multipart(ref parts) if parts.len() == 1));
}

// =============================================================
// Inbound: global auth-failure policy
// =============================================================

#[tokio::test]
async fn unauthorized_clears_store_and_redirects() {
    for status in [401, 403] {
        let navigator = RecordingNavigator::default();
        let transport = FakeTransport::new().respond(status, "");
        let (client, store) =
            client_with(Some("stale"), transport, SessionExpiredRedirect::new(navigator.clone()));

        let err = client.get_json::<serde_json::Value>("/api/leave/me").await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized { status });
        assert_eq!(store.read(), None);
        assert_eq!(navigator.last().as_deref(), Some(SESSION_EXPIRED_PATH));
    }
}

#[tokio::test]
async fn unauthorized_applies_to_every_endpoint() {
    let policy = CountingPolicy::default();
    let transport = FakeTransport::new().respond(401, "").respond(403, "");
    let (client, _) = client_with(Some("t"), transport, policy.clone());

    let _ = client.post_empty("/api/attendance/clock-out").await;
    let _ = client.get_bytes("/images/a.png").await;

    assert_eq!(policy.statuses(), vec![401, 403]);
}

#[tokio::test]
async fn success_and_redirect_statuses_leave_store_unchanged() {
    for status in [200, 201, 204, 302, 399] {
        let policy = CountingPolicy::default();
        let transport = FakeTransport::new().respond(status, "");
        let (client, store) = client_with(Some("keep"), transport, policy.clone());

        client.post_empty("/api/attendance/clock-in").await.unwrap();

        assert_eq!(store.read(), Some("keep".to_owned()));
        assert!(policy.statuses().is_empty());
    }
}

#[tokio::test]
async fn other_errors_do_not_trigger_policy() {
    let policy = CountingPolicy::default();
    let transport = FakeTransport::new()
        .respond(404, r#"{"message":"no such employee"}"#)
        .respond(500, "")
        .fail(TransportError::Network("offline".to_owned()))
        .fail(TransportError::Timeout(Duration::from_secs(10)));
    let (client, store) = client_with(Some("t"), transport, policy.clone());

    let not_found = client.get_bytes("/x").await.unwrap_err();
    let server = client.get_bytes("/x").await.unwrap_err();
    let network = client.get_bytes("/x").await.unwrap_err();
    let timeout = client.get_bytes("/x").await.unwrap_err();

    assert_eq!(not_found, ApiError::Client { status: 404, message: Some("no such employee".to_owned()) });
    assert_eq!(server, ApiError::Server { status: 500, message: None });
    assert_eq!(network, ApiError::Network("offline".to_owned()));
    assert_eq!(timeout, ApiError::Timeout);
    assert!(policy.statuses().is_empty());
    assert_eq!(store.read(), Some("t".to_owned()));
}

#[tokio::test]
async fn bad_json_is_a_decode_error() {
    let transport = FakeTransport::new().respond(200, "not json");
    let (client, _) = client_with(Some("t"), transport, IgnoreAuthFailure);

    let err = client.get_json::<Vec<u32>>("/api/leave/me").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn resolver_targets_auth_me_under_base_url() {
    let config = ApiConfig { base_url: "http://api.local".to_owned(), ..ApiConfig::default() };
    let client = ApiClient::new(
        config,
        Session::new(crate::state::credential::MemoryCredentials::new()),
        FakeTransport::new(),
        IgnoreAuthFailure,
    );
    assert_eq!(client.resolver().profile_url(), "http://api.local/api/auth/me");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_client_starts_without_credential_outside_browser() {
    let client = ApiClient::browser(ApiConfig::default());
    assert!(!client.session().is_authenticated());
    assert_eq!(client.resolver().profile_url(), "/api/auth/me");
}
