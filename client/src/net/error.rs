//! Error taxonomy surfaced by the API client and feature services.
//!
//! ERROR HANDLING
//! ==============
//! Only [`ApiError::Unauthorized`] has a cross-cutting side effect (credential
//! eviction + redirect, applied by the client before the error is returned).
//! Every other variant is for the call site to render inline.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

use super::transport::TransportError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// The client-side timeout elapsed first.
    #[error("request timed out")]
    Timeout,
    /// 401 or 403. The credential has already been evicted.
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16 },
    /// Any other 4xx.
    #[error("request failed: {status}")]
    Client { status: u16, message: Option<String> },
    /// 5xx.
    #[error("server error: {status}")]
    Server { status: u16, message: Option<String> },
    /// Success status but an unexpected body.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Local form validation failed; nothing was sent.
    #[error("{0}")]
    Validation(String),
}

/// How the client treats a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Unauthorized,
    ClientError,
    ServerError,
}

/// Classify a status: 200–399 succeed, 401/403 trigger the auth policy.
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=399 => StatusClass::Success,
        401 | 403 => StatusClass::Unauthorized,
        500..=u16::MAX => StatusClass::ServerError,
        _ => StatusClass::ClientError,
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract `{"message": "..."}` from an error body when the server sent one.
pub fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

impl ApiError {
    /// Build the error for a non-success status and its body.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        match classify_status(status) {
            StatusClass::Unauthorized => Self::Unauthorized { status },
            StatusClass::ServerError => Self::Server { status, message: server_message(body) },
            StatusClass::ClientError | StatusClass::Success => {
                Self::Client { status, message: server_message(body) }
            }
        }
    }

    /// Text for inline UI feedback: the server's message when it sent one,
    /// otherwise `fallback`. Validation errors always show their own text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(text) => text.clone(),
            Self::Client { message: Some(m), .. } | Self::Server { message: Some(m), .. } => m.clone(),
            Self::Timeout => format!("{fallback} (request timed out)"),
            _ => fallback.to_owned(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(msg) => Self::Network(msg),
            TransportError::Timeout(_) => Self::Timeout,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
