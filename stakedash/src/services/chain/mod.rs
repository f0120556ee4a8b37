//! # Chain Client
//!
//! JSON-RPC client for the wallet-agent node, organized one module per
//! contract:
//!
//! ```text
//! chain/
//! ├── client.rs   - RPC transport + ChainService impl
//! ├── token.rs    - staking token (balance, allowance, approve, faucet)
//! ├── nft.rs      - NFT certificate (balance, ownership, approve)
//! └── staking.rs  - staking contract (positions, APR, history, actions)
//! ```

mod client;
mod nft;
mod staking;
mod token;

pub use client::ChainClient;

use crate::core::error::ChainError;
use crate::core::service::ChainService;
use serde_json::Value;
use shared::dto::chain::TxStatus;
use std::time::Duration;

/// How often the receipt of a submitted transaction is polled.
pub const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// How many receipt polls before giving up on a transaction.
pub const CONFIRMATION_POLL_LIMIT: u32 = 120;

/// A stake position as returned by `staking_getStakeInfo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StakePosition {
    pub amount: u128,
    pub pending_rewards: u128,
    pub lock_end_time: i64,
}

/// Result of `staking_getWithdrawableAmount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithdrawableBalance {
    pub withdrawable: u128,
    pub pending_reward: u128,
}

/// One entry of the user's on-contract transaction log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: i64,
    pub kind: String,
    pub amount: u128,
}

/// Poll the receipt of `tx_hash` until it reaches a final status.
///
/// Submission and confirmation are two independently failable operations: a
/// caller that has already confirmed an authorization keeps that
/// authorization even when the follow-up action fails here.
pub async fn wait_for_confirmation(
    chain: &dyn ChainService,
    tx_hash: &str,
) -> Result<(), ChainError> {
    for attempt in 0..CONFIRMATION_POLL_LIMIT {
        if let Some(receipt) = chain.transaction_receipt(tx_hash).await? {
            match receipt.status {
                TxStatus::Confirmed => {
                    tracing::debug!(tx_hash, attempt, "transaction confirmed");
                    return Ok(());
                }
                TxStatus::Failed => return Err(ChainError::TxFailed),
                TxStatus::Pending => {}
            }
        }
        tokio::time::sleep(CONFIRMATION_POLL_INTERVAL).await;
    }
    Err(ChainError::ConfirmationTimeout)
}

// --- result parsing helpers shared by the per-contract modules ---

pub(crate) fn parse_string(value: &Value) -> Result<String, ChainError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ChainError::InvalidResponse(format!("expected string, got {value}")))
}

pub(crate) fn parse_u64(value: &Value) -> Result<u64, ChainError> {
    value
        .as_u64()
        .ok_or_else(|| ChainError::InvalidResponse(format!("expected integer, got {value}")))
}

pub(crate) fn parse_i64(value: &Value) -> Result<i64, ChainError> {
    value
        .as_i64()
        .ok_or_else(|| ChainError::InvalidResponse(format!("expected integer, got {value}")))
}

/// Amounts arrive as decimal strings of base units; tolerate plain integers.
pub(crate) fn parse_u128(value: &Value) -> Result<u128, ChainError> {
    if let Some(text) = value.as_str() {
        return text
            .parse::<u128>()
            .map_err(|_| ChainError::InvalidResponse(format!("bad amount string {text:?}")));
    }
    value
        .as_u64()
        .map(u128::from)
        .ok_or_else(|| ChainError::InvalidResponse(format!("expected amount, got {value}")))
}
