//! CLI command implementations

pub mod accounts;
pub mod export;
pub mod fee;
pub mod node;
pub mod profile;
pub mod refresh;
pub mod send;

use anyhow::{Context, Result};
use dialoguer::{Input, Select};
use kwallet_core::Asset;
use rust_decimal::Decimal;

/// Prompt for one of the supported assets, returning its symbol
pub fn select_symbol() -> Result<&'static str> {
    let labels: Vec<String> = Asset::ALL
        .iter()
        .map(|a| format!("{} ({})", a.coin_name(), a.symbol()))
        .collect();

    let choice = Select::new()
        .with_prompt("Asset")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Asset::ALL[choice].symbol())
}

/// Prompt for a decimal value (amounts, fees)
pub fn prompt_decimal(prompt: &str, initial: Option<Decimal>) -> Result<Decimal> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(value) = initial {
        input = input.with_initial_text(value.to_string());
    }
    let raw = input.interact_text()?;

    raw.trim()
        .parse::<Decimal>()
        .with_context(|| format!("'{}' is not a valid number", raw.trim()))
}
