//! Account domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Asset;

/// A wallet account for a single coin
///
/// Balances and addresses are fixed sample data; the balance only moves when
/// a send is accepted, and accounts are never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub asset: Asset,
    /// Full coin name for display ("Litecoin", "Monero")
    pub coin: String,
    pub address: String,
    pub balance: Decimal,
    /// Summaries of prepared (not broadcast) transactions
    pub pending: Vec<String>,
}

impl Account {
    /// Create an account with the demo sample data for its asset
    pub fn sample(asset: Asset) -> Self {
        let (address, balance) = match asset {
            Asset::Ltc => (
                "ltc1qd0mainsignalsample000000000000",
                Decimal::new(125, 1), // 12.5
            ),
            Asset::Xmr => (
                "48ExampleMoneroAddressPlaceholderMain00000000",
                Decimal::new(80, 1), // 8.0
            ),
        };

        Self {
            asset,
            coin: asset.coin_name().to_string(),
            address: address.to_string(),
            balance,
            pending: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_accounts() {
        let ltc = Account::sample(Asset::Ltc);
        assert_eq!(ltc.coin, "Litecoin");
        assert_eq!(ltc.balance, Decimal::new(125, 1));
        assert!(ltc.address.starts_with("ltc1q"));
        assert!(ltc.pending.is_empty());

        let xmr = Account::sample(Asset::Xmr);
        assert_eq!(xmr.coin, "Monero");
        assert!(xmr.address.starts_with("48"));
    }
}
