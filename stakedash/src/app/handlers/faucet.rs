//! # Faucet Handler
//!
//! Test-token claim, gated on the displayed cooldown.

use crate::app::events::{ActionKind, AppEvent};
use crate::app::state::{AppState, NotifyLevel};
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use crate::services::chain::wait_for_confirmation;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_faucet_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let chain = {
        let mut state = state.write();
        if !state.is_connected() || state.account.faucet_busy {
            return;
        }
        let Some(summary) = state.account.summary.as_ref() else {
            return;
        };
        if summary.faucet_remaining_secs > 0 {
            let remaining = summary.faucet_remaining_secs;
            state.notify(
                NotifyLevel::Warning,
                format!("Faucet available in {remaining}s"),
            );
            return;
        }
        state.account.faucet_busy = true;
        state.chain.clone()
    };

    tokio::spawn(async move {
        let result = submit_faucet(chain.as_ref()).await;
        let _ = event_tx
            .send(AppEvent::ActionFinished {
                action: ActionKind::Faucet,
                result,
            })
            .await;
    });
}

pub(crate) async fn submit_faucet(chain: &dyn ChainService) -> Result<String, ChainError> {
    let tx = chain.faucet().await?;
    wait_for_confirmation(chain, &tx).await?;
    Ok(tx)
}
