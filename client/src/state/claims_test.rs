use super::*;
use crate::test_helpers::token_with_claims;
use serde_json::json;

fn claims(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_claims_reads_payload_segment() {
    let token = token_with_claims(&json!({"sub": "u1", "email": "a@b.com"}));
    let map = decode_claims(&token).unwrap();
    assert_eq!(map.get("sub"), Some(&json!("u1")));
}

#[test]
fn decode_claims_accepts_bearer_prefixed_token() {
    let token = format!("Bearer {}", token_with_claims(&json!({"sub": "u1"})));
    assert!(decode_claims(&token).is_ok());
}

#[test]
fn decode_claims_tolerates_padding() {
    let token = token_with_claims(&json!({"sub": "u"}));
    let padded = token.replacen(".signature", "==.signature", 1);
    assert!(decode_claims(&padded).is_ok());
}

#[test]
fn decode_claims_rejects_opaque_token() {
    assert_eq!(decode_claims("opaque-session-id"), Err(ClaimsError::Malformed));
}

#[test]
fn decode_claims_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(ClaimsError::Encoding(_))));
}

#[test]
fn decode_claims_rejects_non_object_payload() {
    let payload = URL_SAFE_NO_PAD.encode("[1,2]");
    assert_eq!(decode_claims(&format!("h.{payload}.s")), Err(ClaimsError::NotAnObject));
}

// =============================================================
// Rule evaluation order
// =============================================================

#[test]
fn id_prefers_explicit_id_over_subject() {
    let map = claims(json!({"id": 42, "sub": "u1"}));
    assert_eq!(extract(&map, ID_RULES), Some("42".to_owned()));
}

#[test]
fn name_falls_back_through_full_name_email_and_literal() {
    assert_eq!(extract(&claims(json!({"name": "Ann", "fullName": "Ann B"})), NAME_RULES).as_deref(), Some("Ann"));
    assert_eq!(extract(&claims(json!({"fullName": "Ann B"})), NAME_RULES).as_deref(), Some("Ann B"));
    assert_eq!(extract(&claims(json!({"email": "ann@corp.io"})), NAME_RULES).as_deref(), Some("ann"));
    assert_eq!(extract(&claims(json!({})), NAME_RULES).as_deref(), Some("User"));
}

#[test]
fn blank_claims_are_skipped() {
    let map = claims(json!({"name": "  ", "fullName": "Real Name"}));
    assert_eq!(extract(&map, NAME_RULES).as_deref(), Some("Real Name"));
}

#[test]
fn role_uses_first_of_roles_then_literal() {
    assert_eq!(extract(&claims(json!({"roles": ["ADMIN", "HR"]})), ROLE_RULES).as_deref(), Some("ADMIN"));
    assert_eq!(extract(&claims(json!({"roles": []})), ROLE_RULES).as_deref(), Some("Employee"));
    assert_eq!(extract(&claims(json!({"role": "HR", "roles": ["ADMIN"]})), ROLE_RULES).as_deref(), Some("HR"));
}

#[test]
fn email_falls_back_to_subject() {
    assert_eq!(extract(&claims(json!({"sub": "a@b.com"})), EMAIL_RULES).as_deref(), Some("a@b.com"));
}

// =============================================================
// identity_from_token
// =============================================================

#[test]
fn identity_from_subject_and_email_claims() {
    let token = token_with_claims(&json!({"sub": "u1", "email": "a@b.com"}));
    let user = identity_from_token(&token).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "a");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, "Employee");
    assert_eq!(user.department, None);
    assert_eq!(user.designation, None);
}

#[test]
fn identity_passes_through_department_and_designation() {
    let token = token_with_claims(&json!({
        "id": "7", "email": "x@y.z", "department": "Finance", "designation": "Analyst"
    }));
    let user = identity_from_token(&token).unwrap();
    assert_eq!(user.department.as_deref(), Some("Finance"));
    assert_eq!(user.designation.as_deref(), Some("Analyst"));
}

#[test]
fn identity_requires_an_id() {
    let token = token_with_claims(&json!({"email": "a@b.com"}));
    assert_eq!(identity_from_token(&token), Err(ClaimsError::Missing("id")));
}

#[test]
fn identity_requires_an_email() {
    let token = token_with_claims(&json!({"id": 3}));
    assert_eq!(identity_from_token(&token), Err(ClaimsError::Missing("email")));
}
