//! Response classification

use crate::transport::ResponseDescriptor;
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// What the retry loop should do with a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// 2xx: hand the body to the JSON decode step
    Success,
    /// 429 or 5xx: retry the same page while budget remains
    Retry {
        /// Status code that triggered the retry
        status: u16,
        /// Base failure reason, without wait diagnostics
        reason: String,
        /// Seconds advertised by a digit-only `Retry-After` header
        /// (429 responses only)
        retry_after: Option<u64>,
    },
    /// Anything else: abort immediately, never retried
    Fatal {
        /// Status code
        status: u16,
        /// Raw response body, included in the surfaced error
        body: String,
    },
}

/// Classify a raw response
pub fn classify(response: &ResponseDescriptor) -> Disposition {
    match response.status {
        429 => Disposition::Retry {
            status: 429,
            reason: "429 Too Many Requests".to_string(),
            retry_after: parse_retry_after(&response.headers),
        },
        status if status >= 500 => Disposition::Retry {
            status,
            reason: format!("Server error {status}"),
            retry_after: None,
        },
        status if (200..=299).contains(&status) => Disposition::Success,
        status => Disposition::Fatal {
            status,
            body: response.body.clone(),
        },
    }
}

/// Parse a `Retry-After` header composed entirely of decimal digits
///
/// HTTP-date forms are ignored; the computed backoff covers those.
fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?;
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}
