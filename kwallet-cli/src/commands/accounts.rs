//! Accounts command - show balances, addresses and node status

use anyhow::Result;
use colored::Colorize;
use kwallet_core::WalletEngine;

use crate::output;

pub fn run(engine: &WalletEngine) -> Result<()> {
    println!("{}", "Accounts".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Symbol", "Coin", "Address", "Balance", "Pending"]);
    for account in engine.accounts() {
        table.add_row(vec![
            account.asset.symbol().to_string(),
            account.coin.clone(),
            account.address.clone(),
            account.balance.to_string(),
            account.pending.len().to_string(),
        ]);
    }
    println!("{}", table);
    println!();

    // Node status per asset, mirroring the badges in the desktop view
    for account in engine.accounts() {
        match engine.node(account.asset.symbol()) {
            Some(node) => println!(
                "{} node: {}",
                account.asset.symbol(),
                node.display_label().green()
            ),
            None => println!(
                "{} node: {}",
                account.asset.symbol(),
                "not configured".yellow()
            ),
        }
    }

    // Pending summaries, newest last
    for account in engine.accounts() {
        if !account.pending.is_empty() {
            println!();
            println!("{}", format!("{} pending", account.asset.symbol()).bold());
            for summary in &account.pending {
                println!("  {}", summary);
            }
        }
    }

    Ok(())
}
