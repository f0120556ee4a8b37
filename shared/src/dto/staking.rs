//! # Staking Contract Wire Shapes
//!
//! Return types of the staking contract's query surface. Token amounts are
//! decimal strings of base units; timestamps are unix seconds.

use serde::{Deserialize, Serialize};

/// Result of `staking_getStakeInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeInfoDto {
    pub amount: String,
    pub pending_rewards: String,
    pub lock_end_time: i64,
}

/// Result of `staking_getWithdrawableAmount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawableDto {
    pub withdrawable: String,
    pub pending_reward: String,
}

/// One row of `staking_getUserTransactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecordDto {
    pub timestamp: i64,
    pub kind: String,
    pub amount: String,
}
