use super::*;
use crate::net::policy::IgnoreAuthFailure;
use crate::net::transport::Body;
use crate::net::types::LeaveStatus;
use crate::test_helpers::{FakeTransport, client_with};

fn full_form() -> LeaveForm {
    LeaveForm {
        leave_type: Some(LeaveType::FullDay),
        start_date: "2025-01-15".to_owned(),
        end_date: "2025-01-20".to_owned(),
        reason: "Family vacation".to_owned(),
    }
}

#[test]
fn complete_form_validates() {
    let body = full_form().validate().unwrap();
    assert_eq!(body.leave_type, LeaveType::FullDay);
    assert_eq!(body.reason, "Family vacation");
}

#[test]
fn each_missing_field_is_a_validation_error() {
    let cases = [
        LeaveForm { leave_type: None, ..full_form() },
        LeaveForm { start_date: String::new(), ..full_form() },
        LeaveForm { end_date: " ".to_owned(), ..full_form() },
        LeaveForm { reason: String::new(), ..full_form() },
    ];
    for form in cases {
        assert_eq!(form.validate(), Err(ApiError::Validation("Please fill in all fields".to_owned())));
    }
}

#[test]
fn end_before_start_is_rejected() {
    let form = LeaveForm { end_date: "2025-01-14".to_owned(), ..full_form() };
    assert!(matches!(form.validate(), Err(ApiError::Validation(_))));
}

#[test]
fn single_day_leave_is_allowed() {
    let form = LeaveForm { end_date: "2025-01-15".to_owned(), ..full_form() };
    assert!(form.validate().is_ok());
}

#[tokio::test]
async fn missing_start_date_issues_no_network_call() {
    let transport = FakeTransport::new();
    let (client, _) = client_with(Some("t"), transport.clone(), IgnoreAuthFailure);
    let form = LeaveForm { start_date: String::new(), ..full_form() };

    let err = apply_leave(&client, &form).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn valid_form_posts_camel_case_body() {
    let transport = FakeTransport::new().respond(200, "{}");
    let (client, _) = client_with(Some("t"), transport.clone(), IgnoreAuthFailure);

    apply_leave(&client, &full_form()).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].url, "/api/leave/apply");
    let Body::Json(ref text) = sent[0].body else { panic!("expected json body") };
    let value: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(value["leaveType"], "FULL_DAY");
    assert_eq!(value["startDate"], "2025-01-15");
}

#[tokio::test]
async fn history_decodes_requests() {
    let body = r#"[{"id":2,"leaveType":"HALF_DAY","reason":"Dentist","startDate":"2025-02-01","endDate":"2025-02-01","status":"APPROVED"}]"#;
    let transport = FakeTransport::new().respond(200, body);
    let (client, _) = client_with(Some("t"), transport, IgnoreAuthFailure);

    let history = leave_history(&client).await.unwrap();
    assert_eq!(history[0].status, LeaveStatus::Approved);
    assert_eq!(history[0].leave_type, LeaveType::HalfDay);
}
