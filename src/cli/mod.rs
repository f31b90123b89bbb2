//! CLI module
//!
//! Command-line interface for the EasyBroker client.
//!
//! # Commands
//!
//! - `titles` - Print one title per property
//! - `fetch` - Fetch everything and pretty-print the first few

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
