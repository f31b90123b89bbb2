//! Default HTTP transport backed by reqwest

use super::{PageRequest, ResponseDescriptor, Transport};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Production transport over a shared [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "easybroker-client/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &PageRequest) -> Result<ResponseDescriptor> {
        debug!("GET {}", request.url);

        let response = self
            .client
            .get(&request.url)
            .headers(request.headers.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!("GET {} -> {status} ({} bytes)", request.url, body.len());

        Ok(ResponseDescriptor {
            status,
            headers,
            body,
        })
    }
}
