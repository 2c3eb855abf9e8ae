use super::*;

#[test]
fn with_header_replaces_case_insensitively() {
    let request = HttpRequest::get("/x")
        .with_header("authorization", "Bearer a")
        .with_header("Authorization", "Bearer b");
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.header("AUTHORIZATION"), Some("Bearer b"));
}

#[test]
fn new_requests_have_no_headers_or_body() {
    let request = HttpRequest::post("/api/attendance/clock-in");
    assert_eq!(request.method, Method::Post);
    assert!(request.headers.is_empty());
    assert_eq!(request.body, Body::Empty);
}

#[test]
fn response_success_is_2xx_only() {
    assert!(HttpResponse::new(200, Vec::new()).is_success());
    assert!(HttpResponse::new(204, Vec::new()).is_success());
    assert!(!HttpResponse::new(302, Vec::new()).is_success());
    assert!(!HttpResponse::new(404, Vec::new()).is_success());
}

#[test]
fn timeout_error_mentions_duration() {
    let err = TransportError::Timeout(Duration::from_secs(10));
    assert_eq!(err.to_string(), "request timed out after 10s");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn fetch_transport_reports_network_error_outside_browser() {
    let transport = FetchTransport::new(Duration::from_secs(1));
    let result = transport.send(HttpRequest::get("/api/auth/me")).await;
    assert!(matches!(result, Err(TransportError::Network(_))));
}
