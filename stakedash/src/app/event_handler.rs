//! # Event Handler
//!
//! Applies async task results to application state. Everything here runs on
//! the main thread; write locks are taken per event and released before any
//! follow-up task is spawned.

use crate::app::events::{ActionKind, AppEvent};
use crate::app::state::{NftInventory, NotifyLevel, Screen, Session, StakingSummary, WalletSummary};
use crate::app::{handlers, tasks, App};
use crate::core::error::ChainError;
use crate::services::chain::HistoryEntry;
use shared::units::truncate_address;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ConnectFinished(result) => self.handle_connect_finished(result),
            AppEvent::AccountChanged(account) => self.handle_account_changed(account),
            AppEvent::NetworkChanged(chain_id) => self.handle_network_changed(chain_id),
            AppEvent::AccountSummary { generation, result } => {
                self.handle_account_summary(generation, result)
            }
            AppEvent::StakingSummary { generation, result } => {
                self.handle_staking_summary(generation, result)
            }
            AppEvent::NftInventoryFetched { generation, result } => {
                self.handle_nft_inventory(generation, result)
            }
            AppEvent::HistoryFetched { generation, result } => {
                self.handle_history(generation, result)
            }
            AppEvent::ActionFinished { action, result } => {
                self.handle_action_finished(action, result)
            }
            AppEvent::Notify(level, message) => {
                self.state.write().notify(level, message);
            }
        }
    }
}

impl App {
    fn handle_connect_finished(&mut self, result: Result<(String, u64), ChainError>) {
        let watch_nonce = {
            let mut state = self.state.write();
            state.connecting = false;
            match result {
                Ok((account, chain_id)) => {
                    if chain_id != state.config.expected_chain_id {
                        tracing::warn!(
                            chain_id,
                            expected = state.config.expected_chain_id,
                            "wallet is on the wrong network"
                        );
                        state.connect_error = Some(format!(
                            "Wallet is on chain {chain_id}; expected chain {}",
                            state.config.expected_chain_id
                        ));
                        None
                    } else {
                        tracing::info!(account = %account, chain_id, "wallet connected");
                        state.session_nonce += 1;
                        state.session = Some(Session {
                            account: account.clone(),
                            chain_id,
                        });
                        state.session_fault = None;
                        state.connect_error = None;
                        state.reset_views();
                        state.current_screen = Screen::Account;
                        state.notify(
                            NotifyLevel::Success,
                            format!("Wallet connected: {}", truncate_address(&account)),
                        );
                        Some(state.session_nonce)
                    }
                }
                Err(e) => {
                    // Connection failures are logged and shown inline; they
                    // never block the rest of the UI.
                    tracing::warn!(error = %e, "wallet connection failed");
                    state.connect_error = Some(e.user_message());
                    None
                }
            }
        };

        if let Some(nonce) = watch_nonce {
            handlers::session::spawn_wallet_watch(
                self.state.clone(),
                self.event_tx.clone(),
                nonce,
            );
        }
    }

    fn handle_account_changed(&mut self, account: Option<String>) {
        let mut state = self.state.write();
        let Some(current_account) = state.session.as_ref().map(|s| s.account.clone()) else {
            return;
        };

        match account {
            Some(new_account) if !new_account.eq_ignore_ascii_case(&current_account) => {
                tracing::info!(account = %new_account, "wallet account switched");
                if let Some(session) = state.session.as_mut() {
                    session.account = new_account.clone();
                }
                state.reset_views();
                state.notify(
                    NotifyLevel::Info,
                    format!("Account switched to {}", truncate_address(&new_account)),
                );
            }
            Some(_) => {}
            None => {
                tracing::info!("wallet no longer exposes an account; disconnecting");
                state.session = None;
                state.session_nonce += 1;
                state.reset_views();
                state.current_screen = Screen::Connect;
                state.notify(NotifyLevel::Info, "Wallet disconnected");
            }
        }
    }

    fn handle_network_changed(&mut self, chain_id: u64) {
        let mut state = self.state.write();
        let Some(previous) = state.session.as_ref().map(|s| s.chain_id) else {
            return;
        };
        if chain_id == previous {
            return;
        }

        // A network switch invalidates every handle bound to the old chain;
        // the only supported recovery is a fresh start.
        tracing::error!(chain_id, previous, "network changed; session is dead");
        state.session = None;
        state.session_nonce += 1;
        state.reset_views();
        state.current_screen = Screen::Connect;
        state.session_fault = Some(
            "The wallet switched networks. Restart the application to reconnect.".to_string(),
        );
    }

    fn handle_account_summary(&mut self, generation: u64, result: Result<WalletSummary, ChainError>) {
        let dirty = {
            let mut state = self.state.write();
            let fresh = state.account.poll.finish(generation);
            if fresh {
                match result {
                    Ok(summary) => state.account.summary = Some(summary),
                    Err(e) => tracing::warn!(error = %e, "account summary fetch failed; keeping last values"),
                }
            }
            state.account.poll.take_dirty()
        };
        if dirty {
            tasks::wallet::refresh(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_staking_summary(
        &mut self,
        generation: u64,
        result: Result<StakingSummary, ChainError>,
    ) {
        let dirty = {
            let mut state = self.state.write();
            let fresh = state.staking.poll.finish(generation);
            if fresh {
                match result {
                    Ok(summary) => state.staking.summary = Some(summary),
                    Err(e) => tracing::warn!(error = %e, "staking summary fetch failed; keeping last values"),
                }
            }
            state.staking.poll.take_dirty()
        };
        if dirty {
            tasks::staking::refresh(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_nft_inventory(&mut self, generation: u64, result: Result<NftInventory, ChainError>) {
        let dirty = {
            let mut state = self.state.write();
            let fresh = state.nfts.poll.finish(generation);
            if fresh {
                match result {
                    Ok(inventory) => state.nfts.inventory = Some(inventory),
                    Err(e) => tracing::warn!(error = %e, "NFT inventory scan failed; keeping last values"),
                }
            }
            state.nfts.poll.take_dirty()
        };
        if dirty {
            tasks::nft::refresh(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_history(&mut self, generation: u64, result: Result<Vec<HistoryEntry>, ChainError>) {
        let dirty = {
            let mut state = self.state.write();
            let fresh = state.history.poll.finish(generation);
            if fresh {
                match result {
                    Ok(mut entries) => {
                        if state.history.sort_descending {
                            entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                        } else {
                            entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
                        }
                        state.history.entries = entries;
                    }
                    Err(e) => tracing::warn!(error = %e, "history fetch failed; keeping last values"),
                }
            }
            state.history.poll.take_dirty()
        };
        if dirty {
            tasks::history::refresh(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_action_finished(&mut self, action: ActionKind, result: Result<String, ChainError>) {
        let mut state = self.state.write();

        match &action {
            ActionKind::Deposit => state.account.deposit_busy = false,
            ActionKind::Withdraw => state.account.withdraw_busy = false,
            ActionKind::ClaimReward => state.account.claim_busy = false,
            ActionKind::Faucet => state.account.faucet_busy = false,
            ActionKind::StakeNft(_) | ActionKind::UnstakeNft(_) => state.nfts.busy_token = None,
            ActionKind::SetBaseApr => state.admin.busy = false,
        }

        match result {
            Ok(tx_hash) => {
                tracing::info!(action = action.label(), tx_hash = %tx_hash, "action confirmed");
                match &action {
                    ActionKind::Deposit => state.account.deposit_input.clear(),
                    ActionKind::Withdraw => state.account.withdraw_input.clear(),
                    ActionKind::SetBaseApr => state.admin.apr_input.clear(),
                    _ => {}
                }
                // The invalidation counter: every polling view re-fetches.
                state.refresh_epoch += 1;
                state.notify(
                    NotifyLevel::Success,
                    format!("{} confirmed ({})", action.label(), truncate_address(&tx_hash)),
                );
            }
            Err(e) => {
                tracing::error!(action = action.label(), error = %e, "action failed");
                state.notify(
                    NotifyLevel::Error,
                    format!("{} failed: {}", action.label(), e.user_message()),
                );
            }
        }
    }
}
