//! # Staking Token Calls
//!
//! Balance/allowance queries, spend approval, and the faucet surface of the
//! staking token contract.

use super::{parse_i64, parse_string, parse_u128, ChainClient};
use crate::core::error::ChainError;
use serde_json::json;

pub(super) async fn balance_of(client: &ChainClient, address: &str) -> Result<u128, ChainError> {
    let result = client.rpc("token_balanceOf", vec![json!(address)]).await?;
    parse_u128(&result)
}

pub(super) async fn allowance(
    client: &ChainClient,
    owner: &str,
    spender: &str,
) -> Result<u128, ChainError> {
    let result = client
        .rpc("token_allowance", vec![json!(owner), json!(spender)])
        .await?;
    parse_u128(&result)
}

/// Authorize `spender` to move `amount` base units. Returns the tx hash.
pub(super) async fn approve(
    client: &ChainClient,
    spender: &str,
    amount: u128,
) -> Result<String, ChainError> {
    let result = client
        .rpc(
            "token_approve",
            vec![json!(spender), json!(amount.to_string())],
        )
        .await?;
    parse_string(&result)
}

pub(super) async fn faucet(client: &ChainClient) -> Result<String, ChainError> {
    let result = client.rpc("token_faucet", vec![]).await?;
    parse_string(&result)
}

pub(super) async fn last_faucet_timestamp(
    client: &ChainClient,
    address: &str,
) -> Result<i64, ChainError> {
    let result = client
        .rpc("token_lastFaucetTimestamp", vec![json!(address)])
        .await?;
    parse_i64(&result)
}

pub(super) async fn faucet_cooldown(client: &ChainClient) -> Result<i64, ChainError> {
    let result = client.rpc("token_faucetCooldown", vec![]).await?;
    parse_i64(&result)
}

pub(super) async fn faucet_amount(client: &ChainClient) -> Result<u128, ChainError> {
    let result = client.rpc("token_faucetAmount", vec![]).await?;
    parse_u128(&result)
}
