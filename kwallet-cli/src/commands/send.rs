//! Send command - validate and prepare a transaction
//!
//! Nothing is broadcast; an accepted send only moves the in-memory balance
//! and records a pending summary.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use kwallet_core::{Error, WalletEngine};

use crate::commands::{prompt_decimal, select_symbol};
use crate::output;

pub fn run(engine: &mut WalletEngine) -> Result<()> {
    let symbol = select_symbol()?;

    let address: String = Input::new()
        .with_prompt("Destination address")
        .allow_empty(true)
        .interact_text()?;
    let amount = prompt_decimal("Amount", None)?;

    // Default the fee to the engine's estimate, editable
    let estimate = engine.estimate_fee(symbol, amount)?;
    let fee = prompt_decimal("Fee", Some(estimate))?;

    let note: String = Input::new()
        .with_prompt("Note (optional)")
        .allow_empty(true)
        .interact_text()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Preparing transaction...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = engine.send_transaction(symbol, &address, amount, fee, &note);
    spinner.finish_and_clear();

    match result {
        Ok(tx_id) => {
            let balance = engine.account(symbol)?.balance;
            println!("{} Transaction {} prepared", "✓".green(), tx_id.bold());
            println!("New {} balance: {}", symbol, balance);
            output::log(&format!(
                "Prepared {} for {:.8} {} (fee {:.8}). Not broadcast.",
                tx_id, amount, symbol, fee
            ));
        }
        Err(Error::Rejected(violations)) => {
            println!("{} Transaction rejected:", "✗".red());
            for violation in &violations {
                println!("  {}", violation);
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
