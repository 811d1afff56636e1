//! Aggregator Service
//!
//! Calls the auth service and then the log service, one after the other.
//! A failed call is replaced by an inline failure message, so an aggregate is
//! always produced.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::{AuthGateway, DownstreamError, LogGateway};

/// User submitted to the auth service on every aggregate request.
pub const PROBE_USER: &str = "test_user";

/// Outcome of one aggregate request: reply text or failure text per service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub auth_status: String,
    pub log_status: String,
}

impl Aggregate {
    /// Render as two paragraphs. Status text is inserted verbatim.
    pub fn to_html(&self) -> String {
        format!("<p>{}</p><p>{}</p>", self.auth_status, self.log_status)
    }
}

/// Aggregator service trait for dependency injection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AggregatorService: Send + Sync {
    /// Query both downstream services. Never fails.
    async fn aggregate(&self) -> Aggregate;
}

/// Aggregator backed by the downstream gateways
pub struct AggregatorServiceImpl {
    auth: Arc<dyn AuthGateway>,
    log: Arc<dyn LogGateway>,
}

impl AggregatorServiceImpl {
    pub fn new(auth: Arc<dyn AuthGateway>, log: Arc<dyn LogGateway>) -> Self {
        Self { auth, log }
    }

    async fn check_auth(&self) -> String {
        match self.auth.authenticate(&probe_payload()).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Auth service call failed");
                auth_failure(&e)
            }
        }
    }

    async fn log_request(&self) -> String {
        match self.log.log_request().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Log service call failed");
                log_failure(&e)
            }
        }
    }
}

#[async_trait]
impl AggregatorService for AggregatorServiceImpl {
    async fn aggregate(&self) -> Aggregate {
        // Sequential: the log call is only issued once auth has resolved
        let auth_status = self.check_auth().await;
        let log_status = self.log_request().await;

        Aggregate {
            auth_status,
            log_status,
        }
    }
}

/// Payload submitted to the auth service.
pub fn probe_payload() -> Value {
    json!({ "user": PROBE_USER })
}

fn auth_failure(err: &DownstreamError) -> String {
    format!("failed to authenticate: {}", err)
}

fn log_failure(err: &DownstreamError) -> String {
    format!("failed to log request: {}", err)
}
