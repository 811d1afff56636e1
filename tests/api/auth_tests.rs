//! Auth Service API Tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use test_case::test_case;

use multi_service::config::ServiceRole;

use crate::common::{body_text, test_settings, TestApp};

fn auth_app() -> TestApp {
    TestApp::new(test_settings(ServiceRole::Auth))
}

#[test_case(r#"{"user": "test_user"}"#, r#"authenticated user: {"user":"test_user"}"# ; "fixed probe payload")]
#[test_case(r#"{"scopes": ["read", "write"]}"#, r#"authenticated user: {"scopes":["read","write"]}"# ; "nested array")]
#[test_case("{}", "authenticated user: {}" ; "empty object")]
#[test_case("[1, 2]", "authenticated user: [1,2]" ; "array")]
#[tokio::test]
async fn test_authenticate_echoes_payload(body: &str, expected: &str) {
    let response = auth_app().post_json("/", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(body_text(response).await, expected);
}

#[tokio::test]
async fn test_authenticate_is_idempotent() {
    let app = auth_app();
    let body = r#"{"user": "test_user"}"#;

    let first = body_text(app.post_json("/", body).await).await;
    let second = body_text(app.post_json("/", body).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_authenticate_malformed_json_is_rejected() {
    let response = auth_app().post_json("/", "{\"user\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["code"], 10002);
}

#[tokio::test]
async fn test_authenticate_requires_post() {
    let response = auth_app().get("/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
