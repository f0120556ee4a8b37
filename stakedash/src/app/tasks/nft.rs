//! # NFT Inventory Task
//!
//! Rebuilds the certificate inventory from on-chain ownership. The contract
//! exposes no enumeration call, so the unstaked set comes from walking token
//! ids up to a fixed bound and asking `ownerOf` for each; the walk stops as
//! soon as the owned count matches the account's reported balance. Ids at or
//! beyond the bound are invisible to this scan.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NftInventory};
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Upper bound of the ownership walk.
pub(crate) const NFT_SCAN_LIMIT: u64 = 1000;

pub(crate) fn refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, account, staking_address, generation) = {
        let mut state = state.write();
        let Some(session) = state.session.as_ref() else {
            return;
        };
        let account = session.account.clone();
        if state.nfts.poll.in_flight() {
            state.nfts.poll.mark_dirty();
            return;
        }
        let epoch = state.refresh_epoch;
        let generation = state.nfts.poll.begin(epoch);
        (
            state.chain.clone(),
            account,
            state.config.staking_address.clone(),
            generation,
        )
    };

    spawn(async move {
        let result = fetch_inventory(chain.as_ref(), &account, &staking_address).await;
        let _ = event_tx
            .send(AppEvent::NftInventoryFetched { generation, result })
            .await;
    });
}

/// Walk the token-id space and split certificates into the two disjoint
/// sets: owned directly by `account`, and held by the staking contract on
/// the account's behalf.
pub(crate) async fn fetch_inventory(
    chain: &dyn ChainService,
    account: &str,
    staking_address: &str,
) -> Result<NftInventory, ChainError> {
    let owned_count = chain.nft_balance_of(account).await?;

    let mut unstaked = Vec::new();
    for token_id in 0..NFT_SCAN_LIMIT {
        if unstaked.len() as u64 == owned_count {
            break;
        }
        match chain.nft_owner_of(token_id).await {
            Ok(owner) if owner.eq_ignore_ascii_case(account) => unstaked.push(token_id),
            Ok(_) => {}
            // Gaps in the id space are expected, not errors.
            Err(ChainError::NonexistentToken) => {}
            Err(e) => return Err(e),
        }
    }

    let mut staked = Vec::new();
    for token_id in chain.staked_nfts(account).await? {
        match chain.nft_owner_of(token_id).await {
            Ok(owner) if owner.eq_ignore_ascii_case(staking_address) => staked.push(token_id),
            Ok(_) => {}
            Err(ChainError::NonexistentToken) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(NftInventory { unstaked, staked })
}
