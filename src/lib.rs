//! # EasyBroker Client
//!
//! A Rust client for the EasyBroker properties API: fetches the complete
//! property collection page by page, recovering from rate limits and
//! server errors with bounded exponential backoff.
//!
//! ## Features
//!
//! - **Paginated fetch**: page/limit pagination with last-page detection
//! - **Retries with backoff**: 429 and 5xx responses retried up to a budget
//! - **Envelope sniffing**: bare arrays or `content`/`data`/`properties` wrappers
//! - **Pluggable transport and sleep**: deterministic, instant tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use easybroker_client::{ClientConfig, EasyBrokerClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = EasyBrokerClient::new(config)?;
//!
//!     let properties = client.fetch_all_properties().await?;
//!     println!("Total properties fetched: {}", properties.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     EasyBrokerClient                       │
//! │  fetch_all_properties() → Vec<Value>    print_titles()     │
//! └────────────────────────────────────────────────────────────┘
//!                │
//! ┌──────────────┬──────────────┬───────────────┬──────────────┐
//! │  Transport   │    Retry     │    Decode     │    Config    │
//! ├──────────────┼──────────────┼───────────────┼──────────────┤
//! │ PageRequest  │ classify     │ Envelope      │ api_key      │
//! │ reqwest GET  │ backoff      │ content/data/ │ base_url     │
//! │ pluggable    │ Sleeper      │ properties    │ page_size    │
//! └──────────────┴──────────────┴───────────────┴──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the client
pub mod error;

/// Client configuration
pub mod config;

/// Transport gateway: one page request in, one raw response out
pub mod transport;

/// Response classification, backoff, and the sleep capability
pub mod retry;

/// Envelope parsing and item extraction
pub mod decode;

/// The paginated fetch engine
pub mod client;

/// Command-line interface
pub mod cli;

pub use client::{display_title, EasyBrokerClient};
pub use config::ClientConfig;
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
