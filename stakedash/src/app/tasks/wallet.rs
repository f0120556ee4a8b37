//! # Account Summary Task
//!
//! Rebuilds the account screen's snapshot: token and NFT balances, stake
//! position, withdrawable amount and faucet availability.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, WalletSummary};
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Start an account summary fetch unless one is already outstanding, in
/// which case the trigger is coalesced into a single follow-up.
pub(crate) fn refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, account, generation) = {
        let mut state = state.write();
        let Some(session) = state.session.as_ref() else {
            return;
        };
        let account = session.account.clone();
        if state.account.poll.in_flight() {
            state.account.poll.mark_dirty();
            return;
        }
        let epoch = state.refresh_epoch;
        let generation = state.account.poll.begin(epoch);
        (state.chain.clone(), account, generation)
    }; // Lock released before any await

    spawn(async move {
        let result = fetch_summary(chain.as_ref(), &account).await;
        let _ = event_tx.send(AppEvent::AccountSummary { generation, result }).await;
    });
}

/// Gather one consistent-enough snapshot of the account's balances.
pub(crate) async fn fetch_summary(
    chain: &dyn ChainService,
    account: &str,
) -> Result<WalletSummary, ChainError> {
    let token_balance = chain.token_balance_of(account).await?;
    let nft_balance = chain.nft_balance_of(account).await?;
    let stake = chain.stake_info(account).await?;
    let withdrawable = chain.withdrawable_amount(account).await?.withdrawable;
    let last_faucet = chain.last_faucet_timestamp(account).await?;
    let cooldown = chain.faucet_cooldown().await?;
    let faucet_amount = chain.faucet_amount().await?;

    let now = chrono::Utc::now().timestamp();
    let faucet_remaining_secs = (last_faucet + cooldown - now).max(0);

    Ok(WalletSummary {
        token_balance,
        nft_balance,
        stake,
        withdrawable,
        faucet_remaining_secs,
        faucet_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::mock::{MockChain, MOCK_ACCOUNT};

    #[tokio::test]
    async fn summary_reflects_chain_state() {
        let chain = MockChain::with_token_balance(100 * 10u128.pow(18));
        *chain.staked_amount.lock().unwrap() = 40 * 10u128.pow(18);
        *chain.withdrawable.lock().unwrap() = 40 * 10u128.pow(18);
        *chain.lock_end_time.lock().unwrap() = 12345;

        let summary = fetch_summary(&chain, MOCK_ACCOUNT).await.expect("fetch succeeds");
        assert_eq!(summary.token_balance, 100 * 10u128.pow(18));
        assert_eq!(summary.stake.amount, 40 * 10u128.pow(18));
        assert_eq!(summary.withdrawable, 40 * 10u128.pow(18));
        assert_eq!(summary.stake.lock_end_time, 12345);
    }

    #[tokio::test]
    async fn faucet_countdown_is_clamped_to_zero() {
        let chain = MockChain::default();
        // Last claim far in the past: cooldown fully elapsed.
        *chain.last_faucet_ts.lock().unwrap() = 1;
        let summary = fetch_summary(&chain, MOCK_ACCOUNT).await.expect("fetch succeeds");
        assert_eq!(summary.faucet_remaining_secs, 0);

        // Last claim just now: countdown close to the full cooldown.
        *chain.last_faucet_ts.lock().unwrap() = chrono::Utc::now().timestamp();
        let summary = fetch_summary(&chain, MOCK_ACCOUNT).await.expect("fetch succeeds");
        assert!(summary.faucet_remaining_secs > chain.cooldown_secs - 60);
    }
}
