//! whisper-price - Card price lookup service
//!
//! Serves Wisdom Guild card prices over HTTP, or runs one-shot lookups from
//! the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use whisper_price::config::Config;
use whisper_price::whisper::{CardLookup, WhisperClient};
use whisper_price::{demo, server};

#[derive(Parser)]
#[command(
    name = "whisper-price",
    version,
    about = "Card price lookup service scraping Wisdom Guild market prices"
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Serve synthetic results without touching the network
    #[arg(long, global = true)]
    demo: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP lookup service
    #[command(alias = "s")]
    Serve {
        /// Address to bind
        #[arg(short, long, env = "WHISPER_BIND")]
        bind: Option<String>,
    },

    /// Look up a single card and print the result as JSON
    #[command(alias = "l")]
    Lookup {
        /// English card name
        card_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if cli.demo {
        config.demo_mode = true;
    }

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }

            server::serve(config).await
        }

        Commands::Lookup { card_name } => {
            let result = if config.demo_mode {
                demo::lookup(&config.base_url, &card_name)
            } else {
                let client = WhisperClient::new(&config)?;
                CardLookup::new().execute(&client, &card_name).await
            };

            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}
