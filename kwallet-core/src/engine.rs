//! Wallet engine - validation and estimation over in-memory state
//!
//! The engine keeps every record in memory and enforces the validation rules
//! so the presentation layer never touches storage or network resources.
//! It can later be swapped for a fully featured signing/broadcast backend
//! without changing any caller.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Asset, NodeConfig, Profile};

/// Proportional fee rate applied before clamping into the asset's bounds
const FEE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 3); // 0.001

/// Offline-first wallet engine used by the presentation layer
///
/// Single-threaded and synchronous: every operation is a deterministic
/// computation over process-local state. Nothing survives the session.
pub struct WalletEngine {
    profile: Option<Profile>,
    accounts: BTreeMap<Asset, Account>,
    nodes: BTreeMap<Asset, NodeConfig>,
}

impl WalletEngine {
    /// Create an engine holding the fixed sample accounts
    pub fn new() -> Self {
        Self {
            profile: None,
            accounts: Asset::ALL
                .into_iter()
                .map(|asset| (asset, Account::sample(asset)))
                .collect(),
            nodes: BTreeMap::new(),
        }
    }

    // Wallet identity management

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// The loaded profile, or a validation error when none is set
    pub fn profile(&self) -> Result<&Profile> {
        self.profile
            .as_ref()
            .ok_or_else(|| Error::validation("No wallet profile is loaded."))
    }

    /// Validate and store the session profile, replacing any existing one
    pub fn set_profile(&mut self, name: &str, seed_phrase: &str) -> Result<&Profile> {
        let profile = Profile::parse(name, seed_phrase)?;
        Ok(self.profile.insert(profile))
    }

    // Accounts

    /// All accounts in display order (LTC, XMR)
    pub fn accounts(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }

    pub fn account(&self, symbol: &str) -> Result<&Account> {
        let asset = Asset::from_symbol(symbol)?;
        self.accounts
            .get(&asset)
            .ok_or_else(|| Error::unsupported_asset(symbol))
    }

    // Node configuration

    /// Validate and store a node endpoint for an asset, replacing any
    /// existing record
    pub fn set_node(&mut self, symbol: &str, endpoint: &str, tls: bool) -> Result<&NodeConfig> {
        let asset = Asset::from_symbol(symbol)?;
        let node = NodeConfig::parse(asset, endpoint, tls)?;
        Ok(self.nodes.entry(asset).and_modify(|n| *n = node.clone()).or_insert(node))
    }

    pub fn node(&self, symbol: &str) -> Option<&NodeConfig> {
        let asset = Asset::from_symbol(symbol).ok()?;
        self.nodes.get(&asset)
    }

    // Estimation and validation

    /// Proportional fee estimate, clamped into the asset's bounds
    pub fn estimate_fee(&self, symbol: &str, amount: Decimal) -> Result<Decimal> {
        let asset = Asset::from_symbol(symbol)?;
        let bounds = asset.fee_bounds();
        Ok((amount * FEE_RATE).clamp(bounds.lower, bounds.upper))
    }

    /// Run every check and return the ordered violation list (possibly empty)
    ///
    /// Checks are independent; the list collects all of them in one pass.
    /// Only an unknown symbol is an error here.
    pub fn validate_transaction(
        &self,
        symbol: &str,
        address: &str,
        amount: Decimal,
        fee: Decimal,
    ) -> Result<Vec<String>> {
        let asset = Asset::from_symbol(symbol)?;
        let account = self
            .accounts
            .get(&asset)
            .ok_or_else(|| Error::unsupported_asset(symbol))?;

        Ok(self.collect_violations(asset, account, address, amount, fee))
    }

    fn collect_violations(
        &self,
        asset: Asset,
        account: &Account,
        address: &str,
        amount: Decimal,
        fee: Decimal,
    ) -> Vec<String> {
        let mut violations = Vec::new();
        let bounds = asset.fee_bounds();

        if amount <= Decimal::ZERO {
            violations.push("Amount must be greater than zero.".to_string());
        }
        if !bounds.contains(fee) {
            violations.push(format!(
                "Fee must be between {} and {} {} for predictable costs.",
                bounds.lower,
                bounds.upper,
                asset.symbol().to_lowercase()
            ));
        }
        if amount + fee > account.balance {
            violations.push("Insufficient balance for amount plus fee.".to_string());
        }
        if address.is_empty() {
            violations.push("Destination address is required.".to_string());
        } else if !asset.address_is_plausible(address) {
            violations.push(asset.address_hint().to_string());
        }
        if !self.nodes.contains_key(&asset) {
            violations.push("Configure a trusted node endpoint before broadcasting.".to_string());
        }

        violations
    }

    // Sending

    /// Re-validate and, on success, deduct the balance and record a pending
    /// summary
    ///
    /// Requires a loaded profile. A rejected send carries every violation and
    /// leaves all state untouched. The returned id is synthetic; nothing is
    /// broadcast.
    pub fn send_transaction(
        &mut self,
        symbol: &str,
        address: &str,
        amount: Decimal,
        fee: Decimal,
        note: &str,
    ) -> Result<String> {
        if self.profile.is_none() {
            return Err(Error::validation(
                "Load a wallet name and seed phrase before sending.",
            ));
        }

        let asset = Asset::from_symbol(symbol)?;
        let account = self
            .accounts
            .get(&asset)
            .ok_or_else(|| Error::unsupported_asset(symbol))?;

        let violations = self.collect_violations(asset, account, address, amount, fee);
        if !violations.is_empty() {
            return Err(Error::Rejected(violations));
        }

        // Checks passed, mutate
        let account = self
            .accounts
            .get_mut(&asset)
            .ok_or_else(|| Error::unsupported_asset(symbol))?;
        account.balance -= amount + fee;

        let tx_id = format!(
            "{}-{:04}",
            asset.symbol().to_lowercase(),
            account.pending.len() + 1
        );
        let mut summary = format!(
            "{} send {:.8} to {} (fee {:.8})",
            asset.symbol(),
            amount,
            address,
            fee
        );
        if !note.is_empty() {
            summary.push_str(&format!(" — {}", note));
        }
        account.pending.push(summary);

        Ok(tx_id)
    }

    /// Round every balance to 8 decimal places
    ///
    /// Placeholder for a future real sync against the configured nodes.
    pub fn refresh_balances(&mut self) {
        for account in self.accounts.values_mut() {
            account.balance = account.balance.round_dp(8);
        }
    }

    /// Serializable snapshot of the whole session state
    pub fn status(&self) -> WalletStatus {
        WalletStatus {
            profile: self.profile.as_ref().map(|p| p.name.clone()),
            accounts: self
                .accounts
                .values()
                .map(|a| AccountSummary {
                    symbol: a.asset.symbol().to_string(),
                    coin: a.coin.clone(),
                    address: a.address.clone(),
                    balance: a.balance,
                    pending: a.pending.len(),
                })
                .collect(),
            nodes: self
                .nodes
                .values()
                .map(|n| NodeSummary {
                    symbol: n.asset.symbol().to_string(),
                    label: n.display_label(),
                    tls: n.tls,
                })
                .collect(),
        }
    }
}

impl Default for WalletEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of session state for display or JSON export
#[derive(Debug, Serialize)]
pub struct WalletStatus {
    pub profile: Option<String>,
    pub accounts: Vec<AccountSummary>,
    pub nodes: Vec<NodeSummary>,
}

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub symbol: String,
    pub coin: String,
    pub address: String,
    pub balance: Decimal,
    pub pending: usize,
}

#[derive(Debug, Serialize)]
pub struct NodeSummary {
    pub symbol: String,
    pub label: String,
    pub tls: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> String {
        vec!["ember"; 12].join(" ")
    }

    #[test]
    fn test_profile_lifecycle() {
        let mut engine = WalletEngine::new();
        assert!(!engine.has_profile());
        assert!(engine.profile().is_err());

        engine.set_profile("Main", &seed()).unwrap();
        assert!(engine.has_profile());
        assert_eq!(engine.profile().unwrap().name, "Main");

        // Replacing is allowed
        engine.set_profile("Backup", &seed()).unwrap();
        assert_eq!(engine.profile().unwrap().name, "Backup");
    }

    #[test]
    fn test_accounts_in_display_order() {
        let engine = WalletEngine::new();
        let symbols: Vec<_> = engine
            .accounts()
            .iter()
            .map(|a| a.asset.symbol())
            .collect();
        assert_eq!(symbols, vec!["LTC", "XMR"]);
        assert!(engine.account("BTC").is_err());
    }

    #[test]
    fn test_set_node_replaces() {
        let mut engine = WalletEngine::new();
        engine.set_node("LTC", "first.example", true).unwrap();
        engine.set_node("LTC", "second.example:9333", false).unwrap();

        let node = engine.node("LTC").unwrap();
        assert_eq!(node.endpoint, "second.example:9333");
        assert_eq!(node.display_label(), "http://second.example:9333");
        assert!(engine.node("XMR").is_none());
    }

    #[test]
    fn test_estimate_fee_clamps() {
        let engine = WalletEngine::new();
        // 1.0 * 0.001 = 0.001, already inside [0.0001, 0.01]
        assert_eq!(
            engine.estimate_fee("LTC", Decimal::ONE).unwrap(),
            Decimal::new(1, 3)
        );
        // 0.01 * 0.001 = 0.00001, clamped up to the lower bound
        assert_eq!(
            engine.estimate_fee("LTC", Decimal::new(1, 2)).unwrap(),
            Decimal::new(1, 4)
        );
        // 1000 * 0.001 = 1, clamped down to the upper bound
        assert_eq!(
            engine.estimate_fee("LTC", Decimal::new(1000, 0)).unwrap(),
            Decimal::new(1, 2)
        );
        assert!(engine.estimate_fee("BTC", Decimal::ONE).is_err());
    }

    #[test]
    fn test_refresh_rounds_to_eight_places() {
        let mut engine = WalletEngine::new();
        engine.set_profile("Main", &seed()).unwrap();
        engine.set_node("XMR", "node.local:18081", true).unwrap();

        // 0.123456789 leaves the balance with more than 8 places
        engine
            .send_transaction(
                "XMR",
                "48abc",
                Decimal::new(123_456_789, 9),
                Decimal::new(1, 3),
                "",
            )
            .unwrap();
        engine.refresh_balances();

        let balance = engine.account("XMR").unwrap().balance;
        assert!(balance.scale() <= 8);
    }

    #[test]
    fn test_status_snapshot() {
        let mut engine = WalletEngine::new();
        engine.set_node("LTC", "node:9333", true).unwrap();

        let status = engine.status();
        assert!(status.profile.is_none());
        assert_eq!(status.accounts.len(), 2);
        assert_eq!(status.nodes.len(), 1);
        assert_eq!(status.nodes[0].label, "https://node:9333");
    }
}
