//! EasyBroker client CLI
//!
//! Fetches property listings from the EasyBroker API.

use clap::Parser;
use easybroker_client::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    // Pick up EASYBROKER_API_KEY from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let runner = Runner::new(cli);
    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
