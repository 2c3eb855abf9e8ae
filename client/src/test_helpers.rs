//! Fakes shared by unit tests across modules.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::ApiConfig;
use crate::net::client::ApiClient;
use crate::net::policy::AuthFailurePolicy;
use crate::net::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::state::credential::{MemoryCredentials, Session};
use crate::util::navigation::Navigator;

/// Transport that replays scripted outcomes and records every request.
#[derive(Clone, Default)]
pub struct FakeTransport {
    outcomes: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body.as_bytes().to_vec())));
        self
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, b"{}".to_vec())))
    }
}

/// Records navigation targets instead of touching `window.location`.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    targets: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.targets.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn assign(&self, target: &str) {
        self.targets.lock().unwrap().push(target.to_owned());
    }
}

/// Counts auth-failure callbacks.
#[derive(Clone, Default)]
pub struct CountingPolicy {
    statuses: Arc<Mutex<Vec<u16>>>,
}

impl CountingPolicy {
    pub fn statuses(&self) -> Vec<u16> {
        self.statuses.lock().unwrap().clone()
    }
}

impl AuthFailurePolicy for CountingPolicy {
    fn on_auth_failure(&self, status: u16) {
        self.statuses.lock().unwrap().push(status);
    }
}

/// Client over in-memory credentials, the given transport and policy.
pub fn client_with(
    token: Option<&str>,
    transport: FakeTransport,
    policy: impl AuthFailurePolicy + 'static,
) -> (ApiClient, MemoryCredentials) {
    let store = token.map_or_else(MemoryCredentials::new, MemoryCredentials::with_token);
    let client = ApiClient::new(ApiConfig::default(), Session::new(store.clone()), transport, policy);
    (client, store)
}

/// Build an unsigned JWT-shaped token carrying `claims` as its payload.
pub fn token_with_claims(claims: &serde_json::Value) -> String {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}
