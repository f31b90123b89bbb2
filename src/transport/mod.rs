//! Transport gateway
//!
//! A transport sends a single page request and returns the raw response
//! descriptor (status, headers, body). The production implementation wraps
//! a reqwest client; tests plug in scripted fakes.
//!
//! Connection-level failures (DNS, connect, TLS, timeout) surface as
//! [`Error::Http`](crate::error::Error::Http) and are never retried;
//! only classified HTTP status codes are.

mod http;

pub use http::HttpTransport;

use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// A single page request, fully formed
///
/// Ephemeral: constructed per attempt by the client, consumed by the
/// transport.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Page number, 1-indexed
    pub page: u32,
    /// Number of items requested
    pub limit: u32,
    /// Target URL including `page` and `limit` query parameters
    pub url: String,
    /// Request headers (`Accept` and `X-Authorization`)
    pub headers: HeaderMap,
}

/// Raw response from a single transport call
///
/// Produced once per call; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ResponseDescriptor {
    /// HTTP status code
    pub status: u16,
    /// Response headers; lookup is case-insensitive
    pub headers: HeaderMap,
    /// Raw response body
    pub body: String,
}

impl ResponseDescriptor {
    /// Create a descriptor with no headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Capability for sending one page request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request, returning the raw response or a connection-level
    /// error
    async fn send(&self, request: &PageRequest) -> Result<ResponseDescriptor>;
}
