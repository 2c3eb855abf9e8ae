use super::*;
use crate::net::policy::IgnoreAuthFailure;
use crate::net::transport::TransportError;
use crate::state::credential::CredentialStore;
use crate::test_helpers::{CountingPolicy, FakeTransport, client_with, token_with_claims};
use serde_json::json;

#[tokio::test]
async fn no_credential_fails_without_network_call() {
    let transport = FakeTransport::new();
    let (client, _) = client_with(None, transport.clone(), IgnoreAuthFailure);

    let err = client.resolver().resolve_current_user().await.unwrap_err();

    assert_eq!(err, SessionError::NoCredential);
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn authoritative_profile_is_returned_as_is() {
    let token = token_with_claims(&json!({"sub": "claims-id", "email": "claims@b.com"}));
    let transport = FakeTransport::new().respond(
        200,
        r#"{"id":5,"name":"Server Name","email":"s@b.com","role":"HR","department":"People"}"#,
    );
    let (client, _) = client_with(Some(&token), transport.clone(), IgnoreAuthFailure);

    let user = client.resolver().resolve_current_user().await.unwrap();

    assert_eq!(user.id, "5");
    assert_eq!(user.name, "Server Name");
    assert_eq!(user.role, "HR");
    assert_eq!(user.department.as_deref(), Some("People"));
    let sent = transport.sent();
    assert_eq!(sent[0].url, "/api/auth/me");
    assert_eq!(sent[0].header("Authorization").map(str::to_owned), Some(format!("Bearer {token}")));
}

#[tokio::test]
async fn failed_fetch_falls_back_to_claims() {
    let token = token_with_claims(&json!({"sub": "u1", "email": "a@b.com"}));
    let transport = FakeTransport::new().respond(500, "");
    let (client, _) = client_with(Some(&token), transport, IgnoreAuthFailure);

    let user = client.resolver().resolve_current_user().await.unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "a");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, "Employee");
}

#[tokio::test]
async fn unauthorized_profile_fetch_bypasses_global_policy() {
    let token = token_with_claims(&json!({"id": "u2", "email": "b@c.com", "roles": ["MANAGER"]}));
    let policy = CountingPolicy::default();
    let transport = FakeTransport::new().respond(401, "");
    let (client, store) = client_with(Some(&token), transport, policy.clone());

    let user = client.resolver().resolve_current_user().await.unwrap();

    assert_eq!(user.role, "MANAGER");
    assert!(policy.statuses().is_empty());
    assert_eq!(store.read(), Some(token));
}

#[tokio::test]
async fn network_failure_and_bad_body_also_fall_back() {
    let token = token_with_claims(&json!({"sub": "u3", "email": "c@d.com", "name": "Cee"}));
    let transport = FakeTransport::new()
        .fail(TransportError::Network("offline".to_owned()))
        .respond(200, "<html>");
    let (client, _) = client_with(Some(&token), transport, IgnoreAuthFailure);
    let resolver = client.resolver();

    assert_eq!(resolver.resolve_current_user().await.unwrap().name, "Cee");
    assert_eq!(resolver.resolve_current_user().await.unwrap().name, "Cee");
}

#[tokio::test]
async fn undecodable_token_is_profile_unavailable() {
    let transport = FakeTransport::new().respond(503, "");
    let (client, _) = client_with(Some("opaque"), transport, IgnoreAuthFailure);

    let err = client.resolver().resolve_current_user().await.unwrap_err();

    assert_eq!(err, SessionError::ProfileUnavailable);
}
