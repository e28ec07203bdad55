//! Fee command - estimate the fee for an amount

use anyhow::Result;
use kwallet_core::WalletEngine;

use crate::commands::{prompt_decimal, select_symbol};
use crate::output;

pub fn run(engine: &WalletEngine) -> Result<()> {
    let symbol = select_symbol()?;
    let amount = prompt_decimal("Amount", None)?;

    let fee = engine.estimate_fee(symbol, amount)?;
    output::info(&format!("Estimated fee: {:.8} {}", fee, symbol));

    Ok(())
}
