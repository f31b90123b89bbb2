//! Error types for the EasyBroker client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every surfaced error aborts the whole multi-page fetch; there is no
//! partial-result return on failure.

use thiserror::Error;

/// The main error type for the EasyBroker client
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid construction parameters. Raised before any network activity.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The configured base URL does not parse
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection-level transport failure (DNS, connect, TLS, timeout).
    /// Never retried: only classified HTTP statuses are.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status outside the retryable set
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The retry budget was consumed by consecutive retryable failures
    #[error("Failed after {max_retries} retries: {reason}")]
    RetriesExhausted { max_retries: u32, reason: String },

    /// A 2xx response whose body failed to decode
    #[error("Response is not valid JSON: {message}")]
    InvalidJson { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a retry exhaustion error
    pub fn retries_exhausted(max_retries: u32, reason: impl Into<String>) -> Self {
        Self::RetriesExhausted {
            max_retries,
            reason: reason.into(),
        }
    }

    /// Create an invalid JSON error
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }
}

/// Result type alias for the EasyBroker client
pub type Result<T> = std::result::Result<T, Error>;
