//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `ip_enrich` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ip_enrich::initialization::init_logger_with;
use ip_enrich::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present; RECAPTCHA_KEY lives
    // there in development setups.
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("ip_enrich error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
