//! Downstream gateway contracts
//!
//! The aggregator only knows these traits; the HTTP implementations live in
//! the infrastructure layer.

use async_trait::async_trait;
use serde_json::Value;

/// Failure of a single downstream call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownstreamError {
    /// The request never produced a readable response (bad address,
    /// connection refused, reset while reading the body, ...)
    #[error("could not connect to {service} service at '{url}': {reason}")]
    Unreachable {
        service: &'static str,
        url: String,
        reason: String,
    },

    /// The service answered with a non-success status
    #[error("{service} service at '{url}' responded with status {status}")]
    UnexpectedStatus {
        service: &'static str,
        url: String,
        status: u16,
    },
}

/// Auth service client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Submit a payload for authentication and return the service's reply text
    async fn authenticate(&self, payload: &Value) -> Result<String, DownstreamError>;
}

/// Log service client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogGateway: Send + Sync {
    /// Record the current request and return the service's reply text
    async fn log_request(&self) -> Result<String, DownstreamError>;
}
