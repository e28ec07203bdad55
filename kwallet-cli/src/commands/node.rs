//! Node command - register a bring-your-own node endpoint

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use kwallet_core::WalletEngine;

use crate::commands::select_symbol;
use crate::output;

pub fn run(engine: &mut WalletEngine) -> Result<()> {
    let symbol = select_symbol()?;

    let endpoint: String = Input::new()
        .with_prompt("Node endpoint (host or host:port, no scheme)")
        .allow_empty(true)
        .interact_text()?;
    let tls = Confirm::new()
        .with_prompt("Use TLS?")
        .default(true)
        .interact()?;

    let node = engine.set_node(symbol, &endpoint, tls)?;
    let label = node.display_label();

    output::success(&format!("{} {} node set to {}", "✓".green(), symbol, label));
    output::log(&format!(
        "Node endpoint registered for {}. No connection is opened in this demo.",
        symbol
    ));

    Ok(())
}
