//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `visitor_status` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use visitor_status::initialization::init_logger_with;
use visitor_status::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting VISITOR_ADMIN_USER/PASS without exporting them manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_server(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("visitor_status error: {:#}", e);
            process::exit(1);
        }
    }
}
