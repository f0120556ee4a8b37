//! # Chain Service Trait
//!
//! The seam between the application and the wallet-agent RPC client. Handlers
//! and polling tasks depend on this trait, which keeps them testable against
//! a recording mock.

use crate::core::error::ChainError;
use crate::services::chain::{HistoryEntry, StakePosition, WithdrawableBalance};
use async_trait::async_trait;
use shared::dto::chain::TxReceipt;

/// Contract-call surface exposed by the wallet agent.
///
/// Query methods return parsed domain values; state-changing methods return
/// the submitted transaction hash. Confirmation is awaited separately via
/// [`transaction_receipt`](ChainService::transaction_receipt) polling.
#[async_trait]
pub trait ChainService: Send + Sync {
    // --- wallet agent ---

    /// Ask the wallet to expose its accounts; prompts the user on first call.
    async fn request_accounts(&self) -> Result<Vec<String>, ChainError>;

    /// Currently selected account, if the wallet still exposes one.
    async fn selected_account(&self) -> Result<Option<String>, ChainError>;

    /// Chain id the wallet is currently pointed at.
    async fn chain_id(&self) -> Result<u64, ChainError>;

    // --- token contract ---

    async fn token_balance_of(&self, address: &str) -> Result<u128, ChainError>;
    async fn token_allowance(&self, owner: &str, spender: &str) -> Result<u128, ChainError>;
    async fn approve(&self, spender: &str, amount: u128) -> Result<String, ChainError>;
    async fn faucet(&self) -> Result<String, ChainError>;
    async fn last_faucet_timestamp(&self, address: &str) -> Result<i64, ChainError>;
    async fn faucet_cooldown(&self) -> Result<i64, ChainError>;
    async fn faucet_amount(&self) -> Result<u128, ChainError>;

    // --- NFT certificate contract ---

    async fn nft_balance_of(&self, address: &str) -> Result<u64, ChainError>;
    async fn nft_owner_of(&self, token_id: u64) -> Result<String, ChainError>;
    async fn nft_approve(&self, spender: &str, token_id: u64) -> Result<String, ChainError>;

    // --- staking contract ---

    async fn stake_info(&self, address: &str) -> Result<StakePosition, ChainError>;
    async fn staked_nfts(&self, address: &str) -> Result<Vec<u64>, ChainError>;
    async fn withdrawable_amount(&self, address: &str) -> Result<WithdrawableBalance, ChainError>;
    async fn base_apr(&self) -> Result<u32, ChainError>;
    async fn user_transactions(
        &self,
        address: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<HistoryEntry>, ChainError>;
    async fn deposit(&self, amount: u128) -> Result<String, ChainError>;
    async fn withdraw(&self, amount: u128) -> Result<String, ChainError>;
    async fn claim_reward(&self) -> Result<String, ChainError>;
    async fn stake_nft(&self, token_id: u64) -> Result<String, ChainError>;
    async fn unstake_nft(&self, token_id: u64) -> Result<String, ChainError>;
    async fn set_base_apr(&self, bps: u32) -> Result<String, ChainError>;

    // --- receipts ---

    /// Receipt for a submitted transaction, or `None` while still unknown.
    async fn transaction_receipt(&self, tx_hash: &str) -> Result<Option<TxReceipt>, ChainError>;
}
