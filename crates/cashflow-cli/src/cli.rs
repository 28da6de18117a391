//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use clap::{Parser, Subcommand};

/// Cashflow - Cash flow report API and tooling
#[derive(Parser)]
#[command(name = "cashflow")]
#[command(about = "Cash flow report service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Deployment mode: local (mock collaborators) or production
        ///
        /// Production mode resolves COSMOS_ENDPOINT, COSMOS_KEY and
        /// OPENAI_API_KEY through the secret store at startup.
        #[arg(short, long, default_value = "local")]
        mode: String,
    },

    /// Generate a mock transaction batch and print it as JSON
    Generate {
        /// Report type label (AP, GL, ...)
        #[arg(short, long, default_value = "GL")]
        report_type: String,

        /// 4-digit year
        #[arg(short, long)]
        year: i32,

        /// Month (1-12)
        #[arg(short, long)]
        month: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Ask the canned chat backend a question (offline)
    Chat {
        /// Question text
        #[arg(short = 'M', long)]
        message: String,

        /// Report type label (AP, GL, ...)
        #[arg(short, long, default_value = "GL")]
        report_type: String,

        /// 4-digit year
        #[arg(short, long)]
        year: i32,

        /// Month (1-12)
        #[arg(short, long)]
        month: u32,
    },
}
