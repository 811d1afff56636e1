//! Log Service API Tests

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDateTime;

use multi_service::application::services::log_service::{LOGGED_PREFIX, TIMESTAMP_FORMAT};
use multi_service::config::ServiceRole;
use multi_service::startup::{build_router, AppState};

use crate::common::test_settings;

fn log_server() -> TestServer {
    let state = AppState::new(test_settings(ServiceRole::Log)).unwrap();
    TestServer::new(build_router(state)).unwrap()
}

fn parse_logged_at(body: &str) -> NaiveDateTime {
    let timestamp = body
        .strip_prefix(LOGGED_PREFIX)
        .unwrap_or_else(|| panic!("unexpected body: {}", body));
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap()
}

#[tokio::test]
async fn test_log_returns_timestamp() {
    let server = log_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    parse_logged_at(&response.text());
}

#[tokio::test]
async fn test_log_timestamps_do_not_decrease() {
    let server = log_server();

    let first = parse_logged_at(&server.get("/").await.text());
    let second = parse_logged_at(&server.get("/").await.text());

    assert!(second >= first);
}

#[tokio::test]
async fn test_log_requires_get() {
    let server = log_server();

    let response = server.post("/").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    log_server().get("/other").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_headers_present() {
    let server = log_server();

    let response = server.get("/").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}
