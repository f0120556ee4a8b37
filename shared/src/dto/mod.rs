//! # Data Transfer Objects
//!
//! Wire shapes exchanged with the wallet-agent node.

pub mod chain;
pub mod staking;

pub use chain::*;
pub use staking::*;
