//! # Staking Contract Calls
//!
//! Queries and state-changing actions of the staking contract. All amounts
//! cross the wire as base-unit decimal strings and are parsed to `u128` here.

use super::{parse_string, parse_u128, ChainClient, HistoryEntry, StakePosition, WithdrawableBalance};
use crate::core::error::ChainError;
use serde_json::json;
use shared::dto::staking::{StakeInfoDto, TransactionRecordDto, WithdrawableDto};

pub(super) async fn stake_info(
    client: &ChainClient,
    address: &str,
) -> Result<StakePosition, ChainError> {
    let result = client.rpc("staking_getStakeInfo", vec![json!(address)]).await?;
    let dto: StakeInfoDto =
        serde_json::from_value(result).map_err(|e| ChainError::InvalidResponse(e.to_string()))?;
    Ok(StakePosition {
        amount: parse_amount(&dto.amount)?,
        pending_rewards: parse_amount(&dto.pending_rewards)?,
        lock_end_time: dto.lock_end_time,
    })
}

pub(super) async fn staked_nfts(
    client: &ChainClient,
    address: &str,
) -> Result<Vec<u64>, ChainError> {
    let result = client
        .rpc("staking_getStakedNfts", vec![json!(address)])
        .await?;
    serde_json::from_value(result).map_err(|e| ChainError::InvalidResponse(e.to_string()))
}

pub(super) async fn withdrawable_amount(
    client: &ChainClient,
    address: &str,
) -> Result<WithdrawableBalance, ChainError> {
    let result = client
        .rpc("staking_getWithdrawableAmount", vec![json!(address)])
        .await?;
    let dto: WithdrawableDto =
        serde_json::from_value(result).map_err(|e| ChainError::InvalidResponse(e.to_string()))?;
    Ok(WithdrawableBalance {
        withdrawable: parse_amount(&dto.withdrawable)?,
        pending_reward: parse_amount(&dto.pending_reward)?,
    })
}

/// Base APR in basis points.
pub(super) async fn base_apr(client: &ChainClient) -> Result<u32, ChainError> {
    let result = client.rpc("staking_baseApr", vec![]).await?;
    let bps = parse_u128(&result)?;
    u32::try_from(bps).map_err(|_| ChainError::InvalidResponse(format!("APR out of range: {bps}")))
}

pub(super) async fn user_transactions(
    client: &ChainClient,
    address: &str,
    offset: u64,
    limit: u64,
) -> Result<Vec<HistoryEntry>, ChainError> {
    let result = client
        .rpc(
            "staking_getUserTransactions",
            vec![json!(address), json!(offset), json!(limit)],
        )
        .await?;
    let rows: Vec<TransactionRecordDto> =
        serde_json::from_value(result).map_err(|e| ChainError::InvalidResponse(e.to_string()))?;
    rows.into_iter()
        .map(|row| {
            Ok(HistoryEntry {
                timestamp: row.timestamp,
                kind: row.kind,
                amount: parse_amount(&row.amount)?,
            })
        })
        .collect()
}

pub(super) async fn deposit(client: &ChainClient, amount: u128) -> Result<String, ChainError> {
    let result = client
        .rpc("staking_deposit", vec![json!(amount.to_string())])
        .await?;
    parse_string(&result)
}

pub(super) async fn withdraw(client: &ChainClient, amount: u128) -> Result<String, ChainError> {
    let result = client
        .rpc("staking_withdraw", vec![json!(amount.to_string())])
        .await?;
    parse_string(&result)
}

pub(super) async fn claim_reward(client: &ChainClient) -> Result<String, ChainError> {
    let result = client.rpc("staking_claimReward", vec![]).await?;
    parse_string(&result)
}

pub(super) async fn stake_nft(client: &ChainClient, token_id: u64) -> Result<String, ChainError> {
    let result = client.rpc("staking_stakeNft", vec![json!(token_id)]).await?;
    parse_string(&result)
}

pub(super) async fn unstake_nft(client: &ChainClient, token_id: u64) -> Result<String, ChainError> {
    let result = client
        .rpc("staking_unstakeNft", vec![json!(token_id)])
        .await?;
    parse_string(&result)
}

pub(super) async fn set_base_apr(client: &ChainClient, bps: u32) -> Result<String, ChainError> {
    let result = client.rpc("staking_setBaseApr", vec![json!(bps)]).await?;
    parse_string(&result)
}

fn parse_amount(text: &str) -> Result<u128, ChainError> {
    text.parse::<u128>()
        .map_err(|_| ChainError::InvalidResponse(format!("bad amount string {text:?}")))
}
