//! # NFT Certificate Calls
//!
//! Ownership and approval surface of the certificate NFT contract. An
//! `ownerOf` query for a never-minted id surfaces as
//! [`ChainError::NonexistentToken`], which inventory scans treat as a gap
//! rather than a failure.

use super::{parse_string, parse_u64, ChainClient};
use crate::core::error::ChainError;
use serde_json::json;

pub(super) async fn balance_of(client: &ChainClient, address: &str) -> Result<u64, ChainError> {
    let result = client.rpc("nft_balanceOf", vec![json!(address)]).await?;
    parse_u64(&result)
}

pub(super) async fn owner_of(client: &ChainClient, token_id: u64) -> Result<String, ChainError> {
    let result = client.rpc("nft_ownerOf", vec![json!(token_id)]).await?;
    parse_string(&result)
}

/// Authorize `spender` to take custody of `token_id`. Returns the tx hash.
pub(super) async fn approve(
    client: &ChainClient,
    spender: &str,
    token_id: u64,
) -> Result<String, ChainError> {
    let result = client
        .rpc("nft_approve", vec![json!(spender), json!(token_id)])
        .await?;
    parse_string(&result)
}
