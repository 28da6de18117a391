//! Mock batch generation command

use anyhow::Result;

use cashflow_core::MockStore;

pub fn cmd_generate(report_type: &str, year: i32, month: u32, seed: Option<u64>) -> Result<()> {
    let store = match seed {
        Some(seed) => MockStore::with_seed(seed),
        None => MockStore::new(),
    };

    let records = store.generate(report_type, year, month)?;
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
