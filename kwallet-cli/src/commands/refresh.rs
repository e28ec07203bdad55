//! Refresh command - normalize balances
//!
//! A real implementation would sync against the configured nodes; the demo
//! only rounds balances to 8 decimal places.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use kwallet_core::WalletEngine;

use crate::output;

pub fn run(engine: &mut WalletEngine) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Refreshing balances...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    engine.refresh_balances();
    spinner.finish_and_clear();

    output::success("Balances refreshed");
    for account in engine.accounts() {
        println!("  {}: {}", account.asset.symbol(), account.balance);
    }

    Ok(())
}
