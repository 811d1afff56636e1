//! Log Gateway

use async_trait::async_trait;
use reqwest::Client;

use super::read_reply;
use crate::domain::{DownstreamError, LogGateway};

const SERVICE: &str = "logging";

/// HTTP implementation of [`LogGateway`]
#[derive(Clone)]
pub struct HttpLogGateway {
    client: Client,
    url: String,
}

impl HttpLogGateway {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl LogGateway for HttpLogGateway {
    async fn log_request(&self) -> Result<String, DownstreamError> {
        tracing::debug!(url = %self.url, "Calling log service");
        let request = self.client.get(&self.url);
        read_reply(SERVICE, &self.url, request).await
    }
}
