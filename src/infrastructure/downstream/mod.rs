//! Downstream Module
//!
//! Shared reqwest client and reply handling for the HTTP gateways.

pub mod auth_gateway;
pub mod log_gateway;

use std::error::Error as StdError;

use reqwest::{Client, RequestBuilder};

use crate::domain::DownstreamError;

pub use auth_gateway::HttpAuthGateway;
pub use log_gateway::HttpLogGateway;

/// Create the HTTP client shared by all gateways.
///
/// No request timeout is configured; calls wait on the client defaults.
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send a request and read the reply body as text.
///
/// Anything short of a success status with a readable body is a
/// `DownstreamError`.
pub(crate) async fn read_reply(
    service: &'static str,
    url: &str,
    request: RequestBuilder,
) -> Result<String, DownstreamError> {
    let response = request
        .send()
        .await
        .map_err(|e| unreachable(service, url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownstreamError::UnexpectedStatus {
            service,
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| unreachable(service, url, &e))
}

fn unreachable(service: &'static str, url: &str, err: &reqwest::Error) -> DownstreamError {
    DownstreamError::Unreachable {
        service,
        url: url.to_string(),
        reason: error_chain(err),
    }
}

/// reqwest's top-level message rarely names the cause; append the sources.
fn error_chain(err: &reqwest::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}
