//! Server command implementation

use anyhow::Result;

use cashflow_core::{DeploymentMode, SecretStore};

pub async fn cmd_serve(host: &str, port: u16, mode: &str) -> Result<()> {
    let mode: DeploymentMode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    println!("🚀 Starting Cash Flow Report API...");
    println!("   Mode: {}", mode);
    println!("   Listening: http://{}:{}", host, port);
    if mode == DeploymentMode::Local {
        println!("   ⚠️  Local mode - mock data and canned chat replies");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    cashflow_server::serve(host, port, mode, &SecretStore::Env).await
}
