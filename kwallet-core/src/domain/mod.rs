//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod asset;
mod node;
mod profile;
pub mod result;

pub use account::Account;
pub use asset::{Asset, FeeBounds};
pub use node::NodeConfig;
pub use profile::Profile;
