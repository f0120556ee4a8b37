//! # NFT Staking Handlers
//!
//! Stake and unstake flows for certificate NFTs. Membership checks run
//! against the displayed inventory; staking is a two-step submission
//! (custody approval, then the stake itself).

use crate::app::events::{ActionKind, AppEvent};
use crate::app::state::{AppState, NotifyLevel};
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use crate::services::chain::wait_for_confirmation;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_stake_nft_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    token_id: u64,
) {
    let (chain, staking_address) = {
        let mut state = state.write();
        if !state.is_connected() || state.nfts.busy_token.is_some() {
            return;
        }
        let Some(inventory) = state.nfts.inventory.as_ref() else {
            return;
        };
        if !inventory.unstaked.contains(&token_id) {
            state.notify(
                NotifyLevel::Error,
                format!("You don't own certificate #{token_id}"),
            );
            return;
        }
        state.nfts.busy_token = Some(token_id);
        (state.chain.clone(), state.config.staking_address.clone())
    };

    tokio::spawn(async move {
        let result = submit_stake_nft(chain.as_ref(), &staking_address, token_id).await;
        let _ = event_tx
            .send(AppEvent::ActionFinished {
                action: ActionKind::StakeNft(token_id),
                result,
            })
            .await;
    });
}

/// Approve custody transfer, wait for inclusion, then stake and wait again.
pub(crate) async fn submit_stake_nft(
    chain: &dyn ChainService,
    staking_address: &str,
    token_id: u64,
) -> Result<String, ChainError> {
    let approve_tx = chain.nft_approve(staking_address, token_id).await?;
    wait_for_confirmation(chain, &approve_tx).await?;

    let stake_tx = chain.stake_nft(token_id).await?;
    wait_for_confirmation(chain, &stake_tx).await?;
    Ok(stake_tx)
}

pub(crate) fn handle_unstake_nft_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    token_id: u64,
) {
    let chain = {
        let mut state = state.write();
        if !state.is_connected() || state.nfts.busy_token.is_some() {
            return;
        }
        let Some(inventory) = state.nfts.inventory.as_ref() else {
            return;
        };
        if !inventory.staked.contains(&token_id) {
            state.notify(
                NotifyLevel::Error,
                format!("Certificate #{token_id} is not staked"),
            );
            return;
        }
        state.nfts.busy_token = Some(token_id);
        state.chain.clone()
    };

    tokio::spawn(async move {
        let result = submit_unstake_nft(chain.as_ref(), token_id).await;
        let _ = event_tx
            .send(AppEvent::ActionFinished {
                action: ActionKind::UnstakeNft(token_id),
                result,
            })
            .await;
    });
}

pub(crate) async fn submit_unstake_nft(
    chain: &dyn ChainService,
    token_id: u64,
) -> Result<String, ChainError> {
    let tx = chain.unstake_nft(token_id).await?;
    wait_for_confirmation(chain, &tx).await?;
    Ok(tx)
}
