//! Aggregator Service API Tests
//!
//! Real auth and log services run on ephemeral ports; the aggregator is
//! pointed at them (or at a closed port) through its upstream settings.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use multi_service::config::ServiceRole;

use crate::common::{api_settings, body_text, closed_addr, spawn_service, test_settings, TestApp};

const AUTH_REPLY: &str = r#"authenticated user: {"user":"test_user"}"#;

async fn spawn_auth() -> String {
    spawn_service(test_settings(ServiceRole::Auth)).await.to_string()
}

async fn spawn_log() -> String {
    spawn_service(test_settings(ServiceRole::Log)).await.to_string()
}

/// Split `<p>a</p><p>b</p>` into `(a, b)`
fn paragraphs(html: &str) -> (String, String) {
    let inner = html
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .unwrap_or_else(|| panic!("unexpected body: {}", html));
    let (first, second) = inner
        .split_once("</p><p>")
        .unwrap_or_else(|| panic!("expected two paragraphs: {}", html));
    (first.to_string(), second.to_string())
}

#[tokio::test]
async fn test_both_dependencies_reachable() {
    let app = TestApp::new(api_settings(spawn_auth().await, spawn_log().await));

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let (auth, log) = paragraphs(&body_text(response).await);
    assert_eq!(auth, AUTH_REPLY);
    assert!(log.starts_with("request logged at: "), "log paragraph: {}", log);
}

#[tokio::test]
async fn test_auth_unreachable_log_reachable() {
    let auth_addr = closed_addr().await.to_string();
    let app = TestApp::new(api_settings(auth_addr.clone(), spawn_log().await));

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let (auth, log) = paragraphs(&body_text(response).await);
    assert!(
        auth.starts_with(&format!(
            "failed to authenticate: could not connect to auth service at 'http://{}'",
            auth_addr
        )),
        "auth paragraph: {}",
        auth
    );
    assert!(log.starts_with("request logged at: "), "log paragraph: {}", log);
}

#[tokio::test]
async fn test_both_dependencies_unreachable() {
    let app = TestApp::new(api_settings(
        closed_addr().await.to_string(),
        closed_addr().await.to_string(),
    ));

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let (auth, log) = paragraphs(&body_text(response).await);
    assert!(auth.starts_with("failed to authenticate: "), "auth paragraph: {}", auth);
    assert!(log.starts_with("failed to log request: "), "log paragraph: {}", log);
}

#[tokio::test]
async fn test_unset_addresses_degrade() {
    let app = TestApp::new(api_settings("", ""));

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let (auth, log) = paragraphs(&body_text(response).await);
    assert!(auth.starts_with("failed to authenticate: could not connect to auth service at 'http://'"));
    assert!(log.starts_with("failed to log request: could not connect to logging service at 'http://'"));
}

#[tokio::test]
async fn test_swapped_dependencies_degrade() {
    // Log address pointing at the auth service: GET on a POST-only route
    let auth_addr = spawn_auth().await;
    let app = TestApp::new(api_settings(auth_addr.clone(), auth_addr));

    let (auth, log) = paragraphs(&body_text(app.get("/").await).await);

    assert_eq!(auth, AUTH_REPLY);
    assert!(log.ends_with("responded with status 405"), "log paragraph: {}", log);
}

#[tokio::test]
async fn test_end_to_end_over_tcp() {
    let api_addr = spawn_service(api_settings(spawn_auth().await, spawn_log().await)).await;

    let response = reqwest::get(format!("http://{}/", api_addr)).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let (auth, log) = paragraphs(&response.text().await.unwrap());
    assert_eq!(auth, AUTH_REPLY);
    assert!(log.starts_with("request logged at: "));
}
