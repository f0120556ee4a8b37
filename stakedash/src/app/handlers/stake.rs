//! # Token Staking Handlers
//!
//! Deposit, withdraw and claim flows. Deposits are a two-step submission:
//! the spend authorization confirms first, then the deposit itself. A
//! confirmed authorization stays in effect even when the deposit fails.

use crate::app::events::{ActionKind, AppEvent};
use crate::app::state::{AppState, NotifyLevel};
use crate::core::error::{AppError, ChainError};
use crate::core::service::ChainService;
use crate::services::chain::wait_for_confirmation;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_deposit_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, staking_address, amount) = {
        let mut state = state.write();
        if !state.is_connected() || state.account.deposit_busy {
            return;
        }
        let Some(summary) = state.account.summary.as_ref() else {
            return;
        };
        let amount = match validation::validate_amount(&state.account.deposit_input, summary.token_balance)
        {
            Ok(amount) => amount,
            Err(e) => {
                state.notify(NotifyLevel::Error, format!("Deposit rejected: {e}"));
                return;
            }
        };
        state.account.deposit_busy = true;
        (
            state.chain.clone(),
            state.config.staking_address.clone(),
            amount,
        )
    };

    tokio::spawn(async move {
        let result = submit_deposit(chain.as_ref(), &staking_address, amount).await;
        let _ = event_tx
            .send(AppEvent::ActionFinished {
                action: ActionKind::Deposit,
                result,
            })
            .await;
    });
}

/// Authorize the spend, wait for inclusion, then deposit and wait again.
pub(crate) async fn submit_deposit(
    chain: &dyn ChainService,
    staking_address: &str,
    amount: u128,
) -> Result<String, ChainError> {
    let approve_tx = chain.approve(staking_address, amount).await?;
    wait_for_confirmation(chain, &approve_tx).await?;

    let deposit_tx = chain.deposit(amount).await?;
    wait_for_confirmation(chain, &deposit_tx).await?;
    Ok(deposit_tx)
}

pub(crate) fn handle_withdraw_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, amount) = {
        let mut state = state.write();
        if !state.is_connected() || state.account.withdraw_busy {
            return;
        }
        let Some(summary) = state.account.summary.as_ref() else {
            return;
        };
        let now = chrono::Utc::now().timestamp();
        if summary.is_locked(now) {
            let message = AppError::Validation(format!(
                "Tokens are locked until {}",
                crate::ui::format_timestamp(summary.stake.lock_end_time)
            ));
            state.notify(NotifyLevel::Error, format!("Withdrawal rejected: {message}"));
            return;
        }
        let amount = match validation::validate_amount(&state.account.withdraw_input, summary.withdrawable)
        {
            Ok(amount) => amount,
            Err(e) => {
                state.notify(NotifyLevel::Error, format!("Withdrawal rejected: {e}"));
                return;
            }
        };
        state.account.withdraw_busy = true;
        (state.chain.clone(), amount)
    };

    tokio::spawn(async move {
        let result = submit_withdraw(chain.as_ref(), amount).await;
        let _ = event_tx
            .send(AppEvent::ActionFinished {
                action: ActionKind::Withdraw,
                result,
            })
            .await;
    });
}

pub(crate) async fn submit_withdraw(
    chain: &dyn ChainService,
    amount: u128,
) -> Result<String, ChainError> {
    let tx = chain.withdraw(amount).await?;
    wait_for_confirmation(chain, &tx).await?;
    Ok(tx)
}

pub(crate) fn handle_claim_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let chain = {
        let mut state = state.write();
        if !state.is_connected() || state.account.claim_busy {
            return;
        }
        let Some(summary) = state.account.summary.as_ref() else {
            return;
        };
        let now = chrono::Utc::now().timestamp();
        if summary.is_locked(now) {
            state.notify(
                NotifyLevel::Error,
                "Claim rejected: rewards are locked until the lock period ends",
            );
            return;
        }
        if summary.stake.pending_rewards == 0 {
            state.notify(NotifyLevel::Warning, "No rewards to claim");
            return;
        }
        state.account.claim_busy = true;
        state.chain.clone()
    };

    tokio::spawn(async move {
        let result = submit_claim(chain.as_ref()).await;
        let _ = event_tx
            .send(AppEvent::ActionFinished {
                action: ActionKind::ClaimReward,
                result,
            })
            .await;
    });
}

pub(crate) async fn submit_claim(chain: &dyn ChainService) -> Result<String, ChainError> {
    let tx = chain.claim_reward().await?;
    wait_for_confirmation(chain, &tx).await?;
    Ok(tx)
}
