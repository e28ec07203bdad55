//! Profile command - load the session wallet profile

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use kwallet_core::WalletEngine;

use crate::output;

pub fn run(engine: &mut WalletEngine) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Wallet name")
        .allow_empty(true)
        .interact_text()?;
    let seed_phrase: String = Input::new()
        .with_prompt("Seed phrase (12-24 words)")
        .allow_empty(true)
        .interact_text()?;

    let profile = engine.set_profile(&name, &seed_phrase)?;
    let words = profile.seed_phrase.split(' ').count();

    output::success(&format!("{} Profile '{}' loaded", "✓".green(), profile.name));
    output::log(&format!(
        "Profile loaded with a {}-word seed phrase. Nothing is persisted.",
        words
    ));

    Ok(())
}
