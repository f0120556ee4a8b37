//! # Staking Summary Task
//!
//! Rebuilds the staking screen's snapshot: base APR, position, and the
//! staked-NFT count feeding the effective APR display.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, StakingSummary};
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

pub(crate) fn refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, account, generation) = {
        let mut state = state.write();
        let Some(session) = state.session.as_ref() else {
            return;
        };
        let account = session.account.clone();
        if state.staking.poll.in_flight() {
            state.staking.poll.mark_dirty();
            return;
        }
        let epoch = state.refresh_epoch;
        let generation = state.staking.poll.begin(epoch);
        (state.chain.clone(), account, generation)
    };

    spawn(async move {
        let result = fetch_summary(chain.as_ref(), &account).await;
        let _ = event_tx.send(AppEvent::StakingSummary { generation, result }).await;
    });
}

pub(crate) async fn fetch_summary(
    chain: &dyn ChainService,
    account: &str,
) -> Result<StakingSummary, ChainError> {
    let stake = chain.stake_info(account).await?;
    let base_apr_bps = chain.base_apr().await?;
    let staked_nfts = chain.staked_nfts(account).await?;

    Ok(StakingSummary {
        base_apr_bps,
        staked_amount: stake.amount,
        pending_rewards: stake.pending_rewards,
        lock_end_time: stake.lock_end_time,
        staked_nft_count: staked_nfts.len() as u64,
    })
}
