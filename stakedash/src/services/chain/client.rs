//! # RPC Transport
//!
//! HTTP JSON-RPC client for the wallet-agent endpoint.

use crate::core::error::ChainError;
use crate::core::service::ChainService;
use crate::services::chain::{self, HistoryEntry, StakePosition, WithdrawableBalance};
use async_trait::async_trait;
use serde_json::Value;
use shared::dto::chain::{RpcRequest, RpcResponse, TxReceipt};
use std::sync::atomic::{AtomicU64, Ordering};

/// JSON-RPC client for the wallet-agent node.
///
/// Maintains a pooled HTTP connection; requests carry a 10 second timeout so
/// a stalled node can never freeze a caller indefinitely.
pub struct ChainClient {
    pub(crate) client: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl ChainClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one JSON-RPC call and return the raw `result` value.
    pub(crate) async fn rpc(&self, method: &str, params: Vec<Value>) -> Result<Value, ChainError> {
        let request = RpcRequest::new(self.next_id.fetch_add(1, Ordering::Relaxed), method, params);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChainError::Transport(format!(
                "http status {}",
                response.status()
            )));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| ChainError::InvalidResponse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(ChainError::from_rpc(error.code, error.message));
        }
        body.result
            .ok_or_else(|| ChainError::InvalidResponse("response carries neither result nor error".to_string()))
    }
}

#[async_trait]
impl ChainService for ChainClient {
    async fn request_accounts(&self) -> Result<Vec<String>, ChainError> {
        let result = self.rpc("wallet_requestAccounts", vec![]).await?;
        let entries = result
            .as_array()
            .ok_or_else(|| ChainError::InvalidResponse("expected account list".to_string()))?;
        entries.iter().map(chain::parse_string).collect()
    }

    async fn selected_account(&self) -> Result<Option<String>, ChainError> {
        let result = self.rpc("wallet_selectedAccount", vec![]).await?;
        if result.is_null() {
            return Ok(None);
        }
        chain::parse_string(&result).map(Some)
    }

    async fn chain_id(&self) -> Result<u64, ChainError> {
        let result = self.rpc("wallet_chainId", vec![]).await?;
        chain::parse_u64(&result)
    }

    async fn token_balance_of(&self, address: &str) -> Result<u128, ChainError> {
        chain::token::balance_of(self, address).await
    }

    async fn token_allowance(&self, owner: &str, spender: &str) -> Result<u128, ChainError> {
        chain::token::allowance(self, owner, spender).await
    }

    async fn approve(&self, spender: &str, amount: u128) -> Result<String, ChainError> {
        chain::token::approve(self, spender, amount).await
    }

    async fn faucet(&self) -> Result<String, ChainError> {
        chain::token::faucet(self).await
    }

    async fn last_faucet_timestamp(&self, address: &str) -> Result<i64, ChainError> {
        chain::token::last_faucet_timestamp(self, address).await
    }

    async fn faucet_cooldown(&self) -> Result<i64, ChainError> {
        chain::token::faucet_cooldown(self).await
    }

    async fn faucet_amount(&self) -> Result<u128, ChainError> {
        chain::token::faucet_amount(self).await
    }

    async fn nft_balance_of(&self, address: &str) -> Result<u64, ChainError> {
        chain::nft::balance_of(self, address).await
    }

    async fn nft_owner_of(&self, token_id: u64) -> Result<String, ChainError> {
        chain::nft::owner_of(self, token_id).await
    }

    async fn nft_approve(&self, spender: &str, token_id: u64) -> Result<String, ChainError> {
        chain::nft::approve(self, spender, token_id).await
    }

    async fn stake_info(&self, address: &str) -> Result<StakePosition, ChainError> {
        chain::staking::stake_info(self, address).await
    }

    async fn staked_nfts(&self, address: &str) -> Result<Vec<u64>, ChainError> {
        chain::staking::staked_nfts(self, address).await
    }

    async fn withdrawable_amount(&self, address: &str) -> Result<WithdrawableBalance, ChainError> {
        chain::staking::withdrawable_amount(self, address).await
    }

    async fn base_apr(&self) -> Result<u32, ChainError> {
        chain::staking::base_apr(self).await
    }

    async fn user_transactions(
        &self,
        address: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<HistoryEntry>, ChainError> {
        chain::staking::user_transactions(self, address, offset, limit).await
    }

    async fn deposit(&self, amount: u128) -> Result<String, ChainError> {
        chain::staking::deposit(self, amount).await
    }

    async fn withdraw(&self, amount: u128) -> Result<String, ChainError> {
        chain::staking::withdraw(self, amount).await
    }

    async fn claim_reward(&self) -> Result<String, ChainError> {
        chain::staking::claim_reward(self).await
    }

    async fn stake_nft(&self, token_id: u64) -> Result<String, ChainError> {
        chain::staking::stake_nft(self, token_id).await
    }

    async fn unstake_nft(&self, token_id: u64) -> Result<String, ChainError> {
        chain::staking::unstake_nft(self, token_id).await
    }

    async fn set_base_apr(&self, bps: u32) -> Result<String, ChainError> {
        chain::staking::set_base_apr(self, bps).await
    }

    async fn transaction_receipt(&self, tx_hash: &str) -> Result<Option<TxReceipt>, ChainError> {
        let result = self
            .rpc("chain_getTransactionReceipt", vec![serde_json::json!(tx_hash)])
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        serde_json::from_value(result).map_err(|e| ChainError::InvalidResponse(e.to_string()))
    }
}
