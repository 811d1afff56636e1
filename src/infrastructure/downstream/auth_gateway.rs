//! Auth Gateway
//!
//! POSTs JSON payloads to the auth service.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::read_reply;
use crate::domain::{AuthGateway, DownstreamError};

const SERVICE: &str = "auth";

/// HTTP implementation of [`AuthGateway`]
#[derive(Clone)]
pub struct HttpAuthGateway {
    client: Client,
    url: String,
}

impl HttpAuthGateway {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn authenticate(&self, payload: &Value) -> Result<String, DownstreamError> {
        tracing::debug!(url = %self.url, "Calling auth service");
        let request = self.client.post(&self.url).json(payload);
        read_reply(SERVICE, &self.url, request).await
    }
}
