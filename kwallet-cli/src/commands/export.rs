//! Export command - dump the session snapshot as JSON

use anyhow::Result;
use kwallet_core::WalletEngine;

pub fn run(engine: &WalletEngine) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&engine.status())?);
    Ok(())
}
