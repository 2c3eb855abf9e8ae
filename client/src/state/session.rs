//! Current-user resolution with a token-claims fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header and the profile page each resolve the user on mount; there is
//! no central cache, so two consumers may briefly disagree.
//!
//! The authoritative fetch is sent straight to the transport rather than
//! through `ApiClient::send`: a 401 here must not evict the credential and
//! redirect before the claims fallback gets its turn.
//!
//! TRADE-OFFS
//! ==========
//! The fallback trusts unverified token claims for display. It never
//! fabricates an identity without a credential.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use super::claims::identity_from_token;
use super::credential::Session;
use crate::net::client::authorize;
use crate::net::transport::{HttpRequest, Transport};
use crate::net::types::UserIdentity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Nothing stored; the user is logged out.
    #[error("no credential stored")]
    NoCredential,
    /// Both the profile endpoint and the claims fallback failed.
    #[error("failed to load user profile")]
    ProfileUnavailable,
}

/// Resolves [`UserIdentity`] for the stored credential.
#[derive(Clone)]
pub struct SessionResolver {
    profile_url: String,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl SessionResolver {
    pub fn new(profile_url: String, session: Session, transport: Arc<dyn Transport>) -> Self {
        Self { profile_url, session, transport }
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    /// Resolve the current user.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoCredential`] without touching the network when no
    /// token is stored; [`SessionError::ProfileUnavailable`] when neither the
    /// backend nor the token can supply an identity.
    pub async fn resolve_current_user(&self) -> Result<UserIdentity, SessionError> {
        let Some(token) = self.session.token() else {
            return Err(SessionError::NoCredential);
        };

        match self.fetch_profile().await {
            Ok(user) => return Ok(user),
            Err(reason) => log::warn!("profile fetch failed, falling back to token claims: {reason}"),
        }

        identity_from_token(&token).map_err(|err| {
            log::error!("failed to decode token claims: {err}");
            SessionError::ProfileUnavailable
        })
    }

    async fn fetch_profile(&self) -> Result<UserIdentity, String> {
        let request = authorize(HttpRequest::get(self.profile_url.clone()), &self.session);
        let response = self.transport.send(request).await.map_err(|e| e.to_string())?;
        if !response.is_success() {
            return Err(format!("profile request failed: {}", response.status));
        }
        serde_json::from_slice(&response.body).map_err(|e| e.to_string())
    }
}
