//! # Services
//!
//! External integrations. Everything the application knows about the outside
//! world goes through [`chain`], the JSON-RPC client for the wallet-agent
//! node that fronts the staking, token and NFT contracts.

pub mod chain;
