//! Login, registration and logout.
//!
//! Input is validated locally first; a validation failure never reaches the
//! network.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{LoginRequest, LoginResponse, RegisterRequest};
use crate::util::navigation::{LOGIN_PATH, Navigator};

/// Raw sign-up form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

/// Trim and require both login fields.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation("Enter your email and password.".to_owned()));
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Check the sign-up form and build the register body.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] describing the first problem found.
pub fn validate_sign_up(form: &SignUpForm) -> Result<RegisterRequest, ApiError> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    if full_name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(ApiError::Validation("Please fill in all fields".to_owned()));
    }
    if !email.contains('@') {
        return Err(ApiError::Validation("Enter a valid email address.".to_owned()));
    }
    if form.password != form.confirm_password {
        return Err(ApiError::Validation("Passwords do not match.".to_owned()));
    }
    if !form.agree_terms {
        return Err(ApiError::Validation("Please accept the terms to continue.".to_owned()));
    }
    Ok(RegisterRequest {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// `POST /api/auth/login` and store the returned token.
///
/// # Errors
///
/// Validation, transport and HTTP errors from [`ApiClient`]; a response
/// without a token is [`ApiError::Decode`].
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<(), ApiError> {
    let body = validate_login_input(email, password)?;
    let response: LoginResponse = client.post_json("/api/auth/login", &body).await?;
    let token = response
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::Decode("Token not received from server".to_owned()))?;
    client.session().save(&token);
    log::debug!("login succeeded; token stored ({} chars)", token.len());
    Ok(())
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Validation, transport and HTTP errors from [`ApiClient`].
pub async fn register(client: &ApiClient, form: &SignUpForm) -> Result<(), ApiError> {
    let body = validate_sign_up(form)?;
    client.post_json_unit("/api/auth/register", &body).await
}

/// Drop the credential and hard-navigate to the login page.
pub fn logout(client: &ApiClient, navigator: &impl Navigator) {
    client.session().clear();
    navigator.assign(LOGIN_PATH);
}
