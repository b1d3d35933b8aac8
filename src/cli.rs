use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{dashboard, serve};
use crate::config::{ProxyConfig, DEFAULT_BIND_ADDRESS, DEFAULT_FRED_API_BASE};

#[derive(Parser)]
#[command(name = "econdash")]
#[command(about = "Economic indicators dashboard: FRED proxy server and dashboard report")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the proxy web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// FRED API key attached to upstream requests
        #[arg(long, env = "FRED_API_KEY", hide_env_values = true)]
        fred_api_key: Option<String>,

        /// FRED series observations endpoint
        #[arg(long, env = "FRED_API_BASE", default_value = DEFAULT_FRED_API_BASE)]
        fred_api_base: String,
    },
    /// Load the dashboard through a running proxy and print it
    ///
    /// Fetches every indicator concurrently; a series that fails to load is
    /// shown as "No data available" without affecting the others.
    Dashboard {
        /// Base URL of the proxy server
        #[arg(short, long, env = "PROXY_URL", default_value = "http://localhost:3000")]
        proxy_url: String,

        /// Raw observations requested per series
        #[arg(short, long, default_value_t = common::DEFAULT_LIMIT)]
        limit: u32,

        /// Months shown per chart
        #[arg(short, long, default_value_t = compute::DEFAULT_MONTH_COUNT)]
        months: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, fred_api_key, fred_api_base } => {
                let config = ProxyConfig::new(fred_api_key, fred_api_base);
                serve(config, &bind_address).await?;
            }
            Commands::Dashboard { proxy_url, limit, months, json } => {
                dashboard(&proxy_url, limit, months, json).await?;
            }
        }
        Ok(())
    }
}
