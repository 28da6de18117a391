//! Cashflow CLI - Cash flow report service
//!
//! Usage:
//!   cashflow serve --port 8000             Start the API server
//!   cashflow generate --year 2024 -m 2     Print a mock transaction batch
//!   cashflow chat -M "summary" -y 2024 -m 2   Ask the canned chat backend

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve { port, host, mode } => commands::cmd_serve(&host, port, &mode).await,
        Commands::Generate {
            report_type,
            year,
            month,
            seed,
        } => commands::cmd_generate(&report_type, year, month, seed),
        Commands::Chat {
            message,
            report_type,
            year,
            month,
        } => commands::cmd_chat(&message, &report_type, year, month).await,
    }
}
