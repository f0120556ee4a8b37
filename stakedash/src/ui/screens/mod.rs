//! # Screens
//!
//! One module per screen; each takes a state snapshot and routes actions
//! through the app.

pub mod account;
pub mod admin;
pub mod connect;
pub mod history;
pub mod nfts;
pub mod staking;
