//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed, user-correctable input
    #[error("{0}")]
    Validation(String),

    /// Unknown asset symbol - indicates a caller bug
    #[error("Unsupported asset: {0}")]
    UnsupportedAsset(String),

    /// A send was rejected; carries every violation found
    #[error("{}", .0.join("; "))]
    Rejected(Vec<String>),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unsupported-asset error
    pub fn unsupported_asset(symbol: impl Into<String>) -> Self {
        Self::UnsupportedAsset(symbol.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = Error::validation("Wallet name is required.");
        assert_eq!(err.to_string(), "Wallet name is required.");
    }

    #[test]
    fn test_unsupported_asset_display() {
        let err = Error::unsupported_asset("DOGE");
        assert_eq!(err.to_string(), "Unsupported asset: DOGE");
    }

    #[test]
    fn test_rejected_joins_violations() {
        let err = Error::Rejected(vec![
            "Amount must be greater than zero.".to_string(),
            "Destination address is required.".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Amount must be greater than zero.; Destination address is required."
        );
    }
}
