//! # Admin Handler
//!
//! Base APR update, available to the configured administrator account only.

use crate::app::events::{ActionKind, AppEvent};
use crate::app::state::{AppState, NotifyLevel};
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use crate::services::chain::wait_for_confirmation;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_update_apr_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, bps) = {
        let mut state = state.write();
        if !state.is_connected() || state.admin.busy {
            return;
        }
        if !state.is_admin() {
            state.notify(
                NotifyLevel::Error,
                "Only the contract owner can update APR",
            );
            return;
        }
        let bps = match validation::validate_apr_percent(&state.admin.apr_input) {
            Ok(bps) => bps,
            Err(e) => {
                state.notify(NotifyLevel::Error, format!("APR update rejected: {e}"));
                return;
            }
        };
        state.admin.busy = true;
        (state.chain.clone(), bps)
    };

    tokio::spawn(async move {
        let result = submit_set_apr(chain.as_ref(), bps).await;
        let _ = event_tx
            .send(AppEvent::ActionFinished {
                action: ActionKind::SetBaseApr,
                result,
            })
            .await;
    });
}

pub(crate) async fn submit_set_apr(chain: &dyn ChainService, bps: u32) -> Result<String, ChainError> {
    let tx = chain.set_base_apr(bps).await?;
    wait_for_confirmation(chain, &tx).await?;
    Ok(tx)
}
