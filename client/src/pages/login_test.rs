use super::*;

#[test]
fn missing_token_keeps_its_own_message() {
    let err = ApiError::Decode("Token not received from server".to_owned());
    assert_eq!(login_error_message(&err), "Token not received from server");
}

#[test]
fn server_message_wins_over_fallback() {
    let err = ApiError::Client { status: 400, message: Some("Account locked".to_owned()) };
    assert_eq!(login_error_message(&err), "Account locked");
}

#[test]
fn bad_credentials_without_message_use_fallback() {
    let err = ApiError::Unauthorized { status: 401 };
    assert_eq!(login_error_message(&err), LOGIN_FAILED);
}

#[test]
fn blank_input_shows_validation_text() {
    let err = crate::net::auth::validate_login_input(" ", "").unwrap_err();
    assert_eq!(login_error_message(&err), "Enter your email and password.");
}
