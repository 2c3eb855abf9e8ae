//! API gateway client: the single choke point for backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feature services (`net::auth`, `net::attendance`, `net::leave`,
//! `net::employees`) build requests and hand them to [`ApiClient`], which
//! attaches the bearer credential, dispatches through the injected
//! [`Transport`], and classifies the status.
//!
//! AUTH FAILURES
//! =============
//! Any 401/403 clears the credential and runs the injected
//! [`AuthFailurePolicy`] before the error is returned, so the caller's own
//! error handling still runs but cannot cancel the redirect. This applies to
//! background calls too. The session resolver sends its profile fetch around this
//! client.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, StatusClass, classify_status};
use super::policy::{AuthFailurePolicy, SessionExpiredRedirect};
use super::transport::{Body, FetchTransport, FilePart, HttpRequest, HttpResponse, Transport};
use crate::config::ApiConfig;
use crate::state::credential::Session;
use crate::state::session::SessionResolver;
use crate::util::navigation::LocationNavigator;

/// Shared, cheaply cloneable API client provided via context.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    session: Session,
    transport: Arc<dyn Transport>,
    policy: Arc<dyn AuthFailurePolicy>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        session: Session,
        transport: impl Transport + 'static,
        policy: impl AuthFailurePolicy + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            session,
            transport: Arc::new(transport),
            policy: Arc::new(policy),
        }
    }

    /// Client wired to `localStorage`, `fetch`, and the session-expired redirect.
    pub fn browser(config: ApiConfig) -> Self {
        let session = Session::browser(config.token_key);
        let transport = FetchTransport::new(config.timeout);
        Self::new(config, session, transport, SessionExpiredRedirect::new(LocationNavigator))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolver sharing this client's session and transport but not its
    /// auth-failure policy.
    pub fn resolver(&self) -> SessionResolver {
        SessionResolver::new(self.config.url("/api/auth/me"), self.session.clone(), self.transport.clone())
    }

    /// Dispatch `request` under the global auth-failure policy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and any status outside
    /// 200–399. On 401/403 the credential is cleared and the policy has run.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = authorize(request, &self.session);
        log::debug!("{:?} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        match classify_status(response.status) {
            StatusClass::Success => Ok(response),
            StatusClass::Unauthorized => {
                self.session.clear();
                self.policy.on_auth_failure(response.status);
                Err(ApiError::Unauthorized { status: response.status })
            }
            StatusClass::ClientError | StatusClass::ServerError => {
                Err(ApiError::from_status(response.status, &response.body))
            }
        }
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also [`ApiError::Decode`] for a bad body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(HttpRequest::get(self.config.url(path))).await?;
        decode_json(&response.body)
    }

    /// `GET path` and return the raw body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        Ok(self.send(HttpRequest::get(self.config.url(path))).await?.body)
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also [`ApiError::Decode`] for a bad body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(self.json_post(path, body)?).await?;
        decode_json(&response.body)
    }

    /// `POST path` with a JSON body, returning the raw success response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_json_response<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        self.send(self.json_post(path, body)?).await
    }

    /// `POST path` with a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(self.json_post(path, body)?).await.map(|_| ())
    }

    /// `POST path` with no body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpRequest::post(self.config.url(path))).await.map(|_| ())
    }

    /// `POST path` as `multipart/form-data`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_multipart(&self, path: &str, parts: Vec<FilePart>) -> Result<(), ApiError> {
        let request = HttpRequest::post(self.config.url(path)).with_body(Body::Multipart(parts));
        self.send(request).await.map(|_| ())
    }

    fn json_post<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpRequest, ApiError> {
        let text = serde_json::to_string(body)?;
        Ok(HttpRequest::post(self.config.url(path)).with_body(Body::Json(text)))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Attach the content type and, when a credential exists, the bearer header.
///
/// Multipart bodies keep the transport-chosen content type so the boundary
/// parameter survives.
pub fn authorize(request: HttpRequest, session: &Session) -> HttpRequest {
    let request = match request.body {
        Body::Multipart(_) => request,
        Body::Empty | Body::Json(_) => request.with_header("Content-Type", "application/json"),
    };
    match session.bearer() {
        Some(value) => request.with_header("Authorization", value),
        None => request,
    }
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
