//! Main application entry point.
//!
//! This is a thin wrapper around the `domain_reputation` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Wiring the production DNS and WHOIS clients into the server
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use std::sync::Arc;

use domain_reputation::dns::HickoryLookup;
use domain_reputation::initialization::{init_logger_with, init_resolver};
use domain_reputation::whois::TcpWhoisClient;
use domain_reputation::{serve, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so PORT can be
    // set there without exporting it manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Wire the production capabilities
    let records = Arc::new(HickoryLookup::new(init_resolver()));
    let whois = Arc::new(TcpWhoisClient::from_config(&config));

    let state = AppState::new(records, whois, config);

    if let Err(e) = serve(state).await {
        eprintln!("domain_reputation error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
