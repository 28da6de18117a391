//! Offline chat command

use anyhow::Result;

use cashflow_core::{ChatBackend, ChatClient, ChatQuery};

pub async fn cmd_chat(message: &str, report_type: &str, year: i32, month: u32) -> Result<()> {
    let client = ChatClient::canned();
    let reply = client
        .respond(&ChatQuery {
            message: message.to_string(),
            report_type: report_type.to_string(),
            year,
            month,
        })
        .await?;

    println!("{}", reply);

    Ok(())
}
