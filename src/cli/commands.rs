//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// EasyBroker properties API client
#[derive(Parser, Debug)]
#[command(name = "easybroker-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (falls back to EASYBROKER_API_KEY)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Base URL (falls back to EASYBROKER_BASE_URL, then the staging
    /// endpoint)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Items requested per page
    #[arg(long, global = true, default_value_t = 50)]
    pub page_size: u32,

    /// Maximum retries per page
    #[arg(long, global = true, default_value_t = 3)]
    pub max_retries: u32,

    /// Backoff factor in seconds
    #[arg(long, global = true, default_value_t = 0.5)]
    pub backoff_factor: f64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one title per property
    Titles,

    /// Fetch all properties and pretty-print the first few
    Fetch {
        /// How many properties to print in full
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
}
