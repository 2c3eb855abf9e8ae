//! Local decoding of identity claims embedded in the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used only as the session resolver's fallback when `/api/auth/me` fails.
//! The payload segment is base64url-decoded and read as JSON. The signature
//! is NOT verified; these claims are display hints, not proof of identity.
//!
//! DESIGN
//! ======
//! Each identity field is filled by an ordered list of [`ClaimRule`]s; the
//! first rule that yields a non-empty value wins.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

use super::credential::strip_bearer;
use crate::net::types::UserIdentity;

/// Where a field's value may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimRule {
    /// A string (or number) claim.
    Field(&'static str),
    /// First element of an array claim.
    FirstOf(&'static str),
    /// The part before `@` of an email-valued claim.
    EmailLocalPart(&'static str),
    /// A fixed default.
    Literal(&'static str),
}

pub const ID_RULES: &[ClaimRule] = &[ClaimRule::Field("id"), ClaimRule::Field("sub")];

pub const NAME_RULES: &[ClaimRule] = &[
    ClaimRule::Field("name"),
    ClaimRule::Field("fullName"),
    ClaimRule::EmailLocalPart("email"),
    ClaimRule::Literal("User"),
];

pub const EMAIL_RULES: &[ClaimRule] = &[ClaimRule::Field("email"), ClaimRule::Field("sub")];

pub const ROLE_RULES: &[ClaimRule] = &[
    ClaimRule::Field("role"),
    ClaimRule::FirstOf("roles"),
    ClaimRule::Literal("Employee"),
];

pub const DEPARTMENT_RULES: &[ClaimRule] = &[ClaimRule::Field("department")];

pub const DESIGNATION_RULES: &[ClaimRule] = &[ClaimRule::Field("designation")];

/// Why the claims could not produce an identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("token has no payload segment")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not a JSON object")]
    NotAnObject,
    #[error("token has no {0} claim")]
    Missing(&'static str),
}

/// Decode the payload segment of `token` into its claim map.
///
/// # Errors
///
/// Returns [`ClaimsError`] if the token shape, encoding or JSON is invalid.
pub fn decode_claims(token: &str) -> Result<Map<String, Value>, ClaimsError> {
    let Some(payload) = strip_bearer(token).split('.').nth(1) else {
        return Err(ClaimsError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClaimsError::Encoding(e.to_string()))?;
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ClaimsError::NotAnObject),
    }
}

/// Evaluate `rules` in order and return the first value present.
pub fn extract(claims: &Map<String, Value>, rules: &[ClaimRule]) -> Option<String> {
    rules.iter().find_map(|rule| apply_rule(claims, *rule))
}

fn apply_rule(claims: &Map<String, Value>, rule: ClaimRule) -> Option<String> {
    match rule {
        ClaimRule::Field(name) => claims.get(name).and_then(scalar_text),
        ClaimRule::FirstOf(name) => claims.get(name)?.as_array()?.first().and_then(scalar_text),
        ClaimRule::EmailLocalPart(name) => {
            let email = claims.get(name).and_then(scalar_text)?;
            let local = email.split('@').next()?.trim();
            (!local.is_empty()).then(|| local.to_owned())
        }
        ClaimRule::Literal(text) => Some(text.to_owned()),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Build a display identity from the token's claims.
///
/// # Errors
///
/// Returns [`ClaimsError`] if decoding fails or neither an id nor an email
/// can be derived.
pub fn identity_from_token(token: &str) -> Result<UserIdentity, ClaimsError> {
    let claims = decode_claims(token)?;
    Ok(UserIdentity {
        id: extract(&claims, ID_RULES).ok_or(ClaimsError::Missing("id"))?,
        name: extract(&claims, NAME_RULES).unwrap_or_default(),
        email: extract(&claims, EMAIL_RULES).ok_or(ClaimsError::Missing("email"))?,
        role: extract(&claims, ROLE_RULES).unwrap_or_default(),
        department: extract(&claims, DEPARTMENT_RULES),
        designation: extract(&claims, DESIGNATION_RULES),
        ..UserIdentity::default()
    })
}
