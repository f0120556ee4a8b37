//! # Async Tasks
//!
//! Background fetches for the polling views. Each module owns one view's
//! refresh: it claims the view's poll slot under a short write lock, spawns
//! the network work, and reports back through the event channel.

pub mod history;
pub mod nft;
pub mod staking;
pub mod wallet;
