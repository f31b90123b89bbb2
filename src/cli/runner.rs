//! CLI runner - executes commands

use super::{Cli, Commands};
use crate::client::EasyBrokerClient;
use crate::config::{ClientConfig, API_KEY_ENV, BASE_URL_ENV};
use crate::error::{Error, Result};

/// Executes the parsed CLI command
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(self) -> Result<()> {
        let config = self.build_config()?;
        let client = EasyBrokerClient::new(config)?;

        match self.cli.command {
            Commands::Titles => client.print_titles().await,

            Commands::Fetch { limit } => {
                let properties = client.fetch_all_properties().await?;

                for property in properties.iter().take(limit) {
                    let pretty = serde_json::to_string_pretty(property)
                        .unwrap_or_else(|_| property.to_string());
                    println!("{pretty}");
                    println!("{}", "-".repeat(80));
                }
                println!("Total properties fetched: {}", properties.len());
                Ok(())
            }
        }
    }

    /// Merge CLI flags with environment fallbacks into a client config
    fn build_config(&self) -> Result<ClientConfig> {
        let api_key = match &self.cli.api_key {
            Some(key) => key.clone(),
            None => std::env::var(API_KEY_ENV)
                .map_err(|_| Error::config(format!("{API_KEY_ENV} is not set")))?,
        };

        let mut builder = ClientConfig::builder()
            .api_key(api_key)
            .page_size(self.cli.page_size)
            .max_retries(self.cli.max_retries)
            .backoff_factor(self.cli.backoff_factor);

        let base_url = self
            .cli
            .base_url
            .clone()
            .or_else(|| std::env::var(BASE_URL_ENV).ok());
        if let Some(base_url) = base_url {
            builder = builder.base_url(base_url);
        }

        Ok(builder.build())
    }
}
