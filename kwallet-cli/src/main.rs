//! Kernel Wallet CLI - offline-first wallet demo in your terminal
//!
//! State lives only for the session: load a profile, register node
//! endpoints, then prepare (never broadcast) transactions.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dialoguer::Select;
use kwallet_core::WalletEngine;

mod commands;
mod output;

use commands::{accounts, export, fee, node, profile, refresh, send};

/// Kernel Wallet - Litecoin & Monero demo wallet
#[derive(Parser)]
#[command(name = "kwallet", version, about, long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the initial session snapshot as JSON and exit
    #[arg(long)]
    json: bool,
}

const MENU: [&str; 8] = [
    "View accounts",
    "Load wallet profile",
    "Configure node endpoint",
    "Estimate fee",
    "Send transaction",
    "Refresh balances",
    "Export session snapshot (JSON)",
    "Quit",
];

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut engine = WalletEngine::new();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&engine.status())?);
        return Ok(());
    }

    output::log(
        "Interface ready. Load your self-custodial wallet (name + seed phrase) \
         and register your own node endpoints before preparing transactions.",
    );
    println!();

    loop {
        let choice = Select::new()
            .with_prompt("Kernel Wallet")
            .items(&MENU)
            .default(0)
            .interact()?;
        println!();

        let result = match choice {
            0 => accounts::run(&engine),
            1 => profile::run(&mut engine),
            2 => node::run(&mut engine),
            3 => fee::run(&engine),
            4 => send::run(&mut engine),
            5 => refresh::run(&mut engine),
            6 => export::run(&engine),
            _ => break,
        };

        if let Err(e) = result {
            output::error(&e.to_string());
        }
        println!();
    }

    Ok(())
}
