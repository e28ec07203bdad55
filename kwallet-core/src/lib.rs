//! Kernel Wallet Core - validation and estimation engine
//!
//! This crate implements the business logic behind the Kernel Wallet demo:
//!
//! - **domain**: Core entities (Asset, Account, NodeConfig, Profile) with
//!   their validation logic
//! - **engine**: The stateful [`WalletEngine`] the presentation layer talks to
//!
//! Everything is in-memory and single-threaded. There is no key derivation,
//! no signing, no node RPC and no persistence; balances and addresses are
//! sample data validated only for superficial shape.

pub mod domain;
pub mod engine;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Account, Asset, FeeBounds, NodeConfig, Profile};
pub use engine::{AccountSummary, NodeSummary, WalletEngine, WalletStatus};
