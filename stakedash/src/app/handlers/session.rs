//! # Session Handlers
//!
//! Wallet-connection lifecycle: the connect prompt, disconnect, and the
//! background watcher that turns the wallet agent's account/network switches
//! into events on the main queue.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// How often the wallet agent is asked for its selected account/chain.
const WALLET_WATCH_INTERVAL: Duration = Duration::from_secs(1);

/// Handle the connect button: ask the wallet agent for accounts. The agent
/// prompts the user; rejection comes back as a normal error.
pub(crate) fn handle_connect_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let chain = {
        let mut state = state.write();
        if state.connecting || state.session.is_some() {
            return;
        }
        state.connecting = true;
        state.connect_error = None;
        state.chain.clone()
    };

    tokio::spawn(async move {
        let result = connect(chain.as_ref()).await;
        let _ = event_tx.send(AppEvent::ConnectFinished(result)).await;
    });
}

/// Request accounts and the chain id from the wallet agent.
pub(crate) async fn connect(chain: &dyn ChainService) -> Result<(String, u64), ChainError> {
    let accounts = chain.request_accounts().await?;
    let account = accounts.into_iter().next().ok_or(ChainError::Rejected)?;
    let chain_id = chain.chain_id().await?;
    Ok((account, chain_id))
}

/// Handle the disconnect button.
pub(crate) fn handle_disconnect_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if state.session.take().is_some() {
        tracing::info!("wallet disconnected by user");
        state.session_nonce += 1;
        state.reset_views();
        state.current_screen = Screen::Connect;
    }
}

/// Watch the wallet agent for account and network switches.
///
/// Registered once per successful connection; exits as soon as the session
/// it was started for is gone (`nonce` mismatch), so a reconnect never ends
/// up with two watchers.
pub(crate) fn spawn_wallet_watch(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    nonce: u64,
) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(WALLET_WATCH_INTERVAL).await;

            let watched = {
                let state = state.read();
                match state.session.as_ref() {
                    Some(session) if state.session_nonce == nonce => {
                        Some((state.chain.clone(), session.account.clone(), session.chain_id))
                    }
                    _ => None,
                }
            };
            let Some((chain, account, chain_id)) = watched else {
                tracing::debug!(nonce, "wallet watch stopped");
                break;
            };

            match chain.selected_account().await {
                Ok(selected) => {
                    let changed = match &selected {
                        Some(current) => !current.eq_ignore_ascii_case(&account),
                        None => true,
                    };
                    if changed {
                        let _ = event_tx.send(AppEvent::AccountChanged(selected)).await;
                        continue;
                    }
                }
                Err(e) => {
                    // Transient agent trouble; keep the session and retry.
                    tracing::debug!(error = %e, "wallet account poll failed");
                    continue;
                }
            }

            match chain.chain_id().await {
                Ok(current) if current != chain_id => {
                    let _ = event_tx.send(AppEvent::NetworkChanged(current)).await;
                }
                Ok(_) => {}
                Err(e) => tracing::debug!(error = %e, "chain id poll failed"),
            }
        }
    });
}
