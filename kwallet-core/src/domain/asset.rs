//! Asset domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// A supported asset, identified by its short symbol ("LTC", "XMR")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Asset {
    Ltc,
    Xmr,
}

/// Inclusive per-asset fee range, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBounds {
    pub lower: Decimal,
    pub upper: Decimal,
}

impl FeeBounds {
    pub fn contains(&self, fee: Decimal) -> bool {
        fee >= self.lower && fee <= self.upper
    }
}

impl Asset {
    /// All supported assets, in display order
    pub const ALL: [Asset; 2] = [Asset::Ltc, Asset::Xmr];

    /// Resolve a short symbol to an asset
    ///
    /// Symbols are exact-match uppercase; anything else is an
    /// unsupported-asset error.
    pub fn from_symbol(symbol: &str) -> Result<Asset> {
        match symbol {
            "LTC" => Ok(Asset::Ltc),
            "XMR" => Ok(Asset::Xmr),
            other => Err(Error::unsupported_asset(other)),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::Ltc => "LTC",
            Asset::Xmr => "XMR",
        }
    }

    /// Full display name of the coin
    pub fn coin_name(&self) -> &'static str {
        match self {
            Asset::Ltc => "Litecoin",
            Asset::Xmr => "Monero",
        }
    }

    pub fn fee_bounds(&self) -> FeeBounds {
        match self {
            Asset::Ltc => FeeBounds {
                lower: Decimal::new(1, 4),  // 0.0001
                upper: Decimal::new(1, 2),  // 0.01
            },
            Asset::Xmr => FeeBounds {
                lower: Decimal::new(5, 5),  // 0.00005
                upper: Decimal::new(2, 2),  // 0.02
            },
        }
    }

    /// Superficial shape check on a destination address
    ///
    /// This is a first-character plausibility test only; real checksum
    /// validation belongs to a future signing backend.
    pub fn address_is_plausible(&self, address: &str) -> bool {
        let Some(first) = address.chars().next() else {
            return false;
        };
        match self {
            Asset::Ltc => matches!(first.to_ascii_lowercase(), 'l' | 'm'),
            Asset::Xmr => matches!(first, '4' | '8'),
        }
    }

    /// Human-readable hint shown when the address shape check fails
    pub fn address_hint(&self) -> &'static str {
        match self {
            Asset::Ltc => "Litecoin addresses typically start with l, L, or m.",
            Asset::Xmr => "Monero addresses usually start with 4 or 8.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_resolution() {
        assert_eq!(Asset::from_symbol("LTC").unwrap(), Asset::Ltc);
        assert_eq!(Asset::from_symbol("XMR").unwrap(), Asset::Xmr);
        assert!(Asset::from_symbol("BTC").is_err());
        // Symbols are exact-match, lowercase is rejected
        assert!(Asset::from_symbol("ltc").is_err());
    }

    #[test]
    fn test_fee_bounds() {
        let ltc = Asset::Ltc.fee_bounds();
        assert!(ltc.contains(Decimal::new(1, 3))); // 0.001
        assert!(!ltc.contains(Decimal::new(2, 2))); // 0.02 above upper
        assert!(!ltc.contains(Decimal::new(1, 5))); // 0.00001 below lower

        let xmr = Asset::Xmr.fee_bounds();
        assert!(xmr.contains(Decimal::new(2, 2)));
    }

    #[test]
    fn test_address_plausibility() {
        assert!(Asset::Ltc.address_is_plausible("ltc1qxyz"));
        assert!(Asset::Ltc.address_is_plausible("LXYZ"));
        assert!(Asset::Ltc.address_is_plausible("mxyz"));
        assert!(!Asset::Ltc.address_is_plausible("3xyz"));
        assert!(!Asset::Ltc.address_is_plausible(""));

        assert!(Asset::Xmr.address_is_plausible("48abc"));
        assert!(Asset::Xmr.address_is_plausible("8abc"));
        assert!(!Asset::Xmr.address_is_plausible("9abc"));
    }
}
