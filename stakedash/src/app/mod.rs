//! # Application Orchestrator
//!
//! The [`App`] struct ties the pieces together: shared state behind
//! `Arc<RwLock<AppState>>`, an unbounded event channel carrying async task
//! results back to the main thread, and the per-frame tick that drains that
//! channel and schedules polling fetches.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Main thread (egui frame)                │
//! │   on_tick(): drain AppEvent channel → event_handler      │
//! │              schedule due polls      → tasks::*          │
//! │   handle_*_click(): validate → spawn submission          │
//! └──────────────┬───────────────────────────▲───────────────┘
//!                │ tokio::spawn              │ async_channel
//! ┌──────────────▼───────────────────────────┴───────────────┐
//! │          Tokio runtime (network I/O only)                │
//! │   polling fetches, submissions, confirmation waits,      │
//! │   wallet account/network watcher                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are held briefly and never across an `.await`; every result crosses
//! back through the channel so state transitions happen on the main thread.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::{ActionKind, AppEvent};
pub use state::*;

use crate::config::AppConfig;
use crate::core::service::ChainService;
use crate::services::chain::ChainClient;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Poll cadence of the balance/stake views.
const SUMMARY_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state. Read for rendering, written by
    /// the event handler and action handlers; locks are released immediately.
    pub state: Arc<RwLock<AppState>>,
    /// Receiver half of the event channel, polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,
    /// Sender half, cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Build the app against the environment configuration and the real RPC
    /// client. No connection is attempted; that waits for the user.
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let chain = Arc::new(ChainClient::new(&config.rpc_url));
        Self::with_chain(config, chain)
    }

    /// Build the app with an explicit chain service (tests inject a mock).
    pub fn with_chain(config: AppConfig, chain: Arc<dyn ChainService>) -> Self {
        let state = AppState::new(config, chain);
        let (event_tx, event_rx) = unbounded();

        tracing::info!("application state initialized; waiting for wallet connection");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame: apply async results, then start whatever fetches
    /// are due. Non-blocking in both halves.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.drive_polls();
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Start every fetch whose trigger fired: timer tick for the summary
    /// views, refresh-epoch change or first-run for all of them.
    fn drive_polls(&mut self) {
        let (account_due, staking_due, nfts_due, history_due) = {
            let mut state = self.state.write();
            if state.session.is_none() {
                return;
            }
            let epoch = state.refresh_epoch;
            (
                state.account.poll.poll_trigger(Some(SUMMARY_POLL_INTERVAL), epoch),
                state.staking.poll.poll_trigger(Some(SUMMARY_POLL_INTERVAL), epoch),
                state.nfts.poll.poll_trigger(None, epoch),
                state.history.poll.poll_trigger(None, epoch),
            )
        };

        if account_due {
            tasks::wallet::refresh(self.state.clone(), self.event_tx.clone());
        }
        if staking_due {
            tasks::staking::refresh(self.state.clone(), self.event_tx.clone());
        }
        if nfts_due {
            tasks::nft::refresh(self.state.clone(), self.event_tx.clone());
        }
        if history_due {
            tasks::history::refresh(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Sender for creating auxiliary tasks outside the orchestrator.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    // ========== GUI action methods - delegating to handlers ==========

    pub fn handle_connect_click(&mut self) {
        handlers::session::handle_connect_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_disconnect_click(&mut self) {
        handlers::session::handle_disconnect_click(self.state.clone());
    }

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
    }

    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone());
    }

    pub fn handle_deposit_click(&mut self) {
        handlers::stake::handle_deposit_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_withdraw_click(&mut self) {
        handlers::stake::handle_withdraw_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_claim_click(&mut self) {
        handlers::stake::handle_claim_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_faucet_click(&mut self) {
        handlers::faucet::handle_faucet_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_stake_nft_click(&mut self, token_id: u64) {
        handlers::nft::handle_stake_nft_click(self.state.clone(), self.event_tx.clone(), token_id);
    }

    pub fn handle_unstake_nft_click(&mut self, token_id: u64) {
        handlers::nft::handle_unstake_nft_click(self.state.clone(), self.event_tx.clone(), token_id);
    }

    /// Manual refresh of the NFT inventory scan.
    pub fn handle_nft_refresh_click(&mut self) {
        tasks::nft::refresh(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_update_apr_click(&mut self) {
        handlers::admin::handle_update_apr_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_history_page_change(&mut self, page: usize) {
        handlers::history::set_page(self.state.clone(), self.event_tx.clone(), page);
    }

    pub fn handle_history_page_size_change(&mut self, size: usize) {
        handlers::history::set_page_size(self.state.clone(), self.event_tx.clone(), size);
    }

    pub fn handle_history_sort_toggle(&mut self) {
        handlers::history::toggle_sort(self.state.clone(), self.event_tx.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ChainError;
    use crate::core::service::mock::{MockChain, MOCK_ACCOUNT, MOCK_STAKING};

    fn test_config() -> AppConfig {
        AppConfig {
            rpc_url: "http://127.0.0.1:0".to_string(),
            staking_address: MOCK_STAKING.to_string(),
            token_address: "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".to_string(),
            nft_address: "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0".to_string(),
            admin_address: MOCK_ACCOUNT.to_string(),
            expected_chain_id: 97,
        }
    }

    fn app_with_mock() -> (App, Arc<MockChain>) {
        let chain = Arc::new(MockChain::default());
        (App::with_chain(test_config(), chain.clone()), chain)
    }

    fn connect(app: &App, account: &str) {
        let mut state = app.state.write();
        state.session = Some(Session {
            account: account.to_string(),
            chain_id: 97,
        });
        state.current_screen = Screen::Account;
    }

    #[test]
    fn initial_state_is_disconnected() {
        let (app, _) = app_with_mock();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Connect);
        assert!(state.session.is_none());
        assert!(!state.connecting);
        assert_eq!(state.refresh_epoch, 0);
        assert!(state.account.summary.is_none());
    }

    #[test]
    fn navigation_is_pinned_to_connect_without_a_session() {
        let (mut app, _) = app_with_mock();
        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Connect);
        app.handle_screen_change(Screen::Account);
        assert_eq!(app.state.read().current_screen, Screen::Connect);
    }

    #[test]
    fn navigation_cycles_through_screens_when_connected() {
        let (mut app, _) = app_with_mock();
        // Not the admin account: the admin screen is skipped.
        connect(&app, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

        let expected = [
            Screen::Staking,
            Screen::Nfts,
            Screen::History,
            Screen::Connect,
            Screen::Account,
        ];
        for screen in expected {
            app.next_screen();
            assert_eq!(app.state.read().current_screen, screen);
        }

        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Connect);
    }

    #[test]
    fn admin_screen_is_reachable_for_the_admin_account_only() {
        let (mut app, _) = app_with_mock();
        connect(&app, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        app.handle_screen_change(Screen::Admin);
        assert_eq!(app.state.read().current_screen, Screen::Account);

        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);
        app.handle_screen_change(Screen::Admin);
        assert_eq!(app.state.read().current_screen, Screen::Admin);
    }

    #[test]
    fn successful_action_bumps_epoch_exactly_once_and_clears_input() {
        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);
        {
            let mut state = app.state.write();
            state.account.deposit_input = "50".to_string();
            state.account.deposit_busy = true;
        }

        app.handle_event(AppEvent::ActionFinished {
            action: ActionKind::Deposit,
            result: Ok("0xtx0001".to_string()),
        });

        let state = app.state.read();
        assert_eq!(state.refresh_epoch, 1);
        assert!(state.account.deposit_input.is_empty());
        assert!(!state.account.deposit_busy);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(level, _)| *level == NotifyLevel::Success));
    }

    #[test]
    fn failed_action_keeps_input_and_epoch() {
        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);
        {
            let mut state = app.state.write();
            state.account.withdraw_input = "10".to_string();
            state.account.withdraw_busy = true;
        }

        app.handle_event(AppEvent::ActionFinished {
            action: ActionKind::Withdraw,
            result: Err(ChainError::Reverted("execution reverted: locked".to_string())),
        });

        let state = app.state.read();
        assert_eq!(state.refresh_epoch, 0);
        assert_eq!(state.account.withdraw_input, "10");
        assert!(!state.account.withdraw_busy);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(level, message)| *level == NotifyLevel::Error && message.contains("locked")));
    }

    #[tokio::test]
    async fn connect_finished_creates_session_and_switches_screen() {
        let (mut app, _) = app_with_mock();
        app.state.write().connecting = true;

        app.handle_event(AppEvent::ConnectFinished(Ok((MOCK_ACCOUNT.to_string(), 97))));

        let state = app.state.read();
        assert!(!state.connecting);
        assert_eq!(
            state.session,
            Some(Session {
                account: MOCK_ACCOUNT.to_string(),
                chain_id: 97
            })
        );
        assert_eq!(state.current_screen, Screen::Account);
        assert!(state.connect_error.is_none());
    }

    #[test]
    fn connect_failure_reports_inline_without_a_session() {
        let (mut app, _) = app_with_mock();
        app.state.write().connecting = true;

        app.handle_event(AppEvent::ConnectFinished(Err(ChainError::Rejected)));

        let state = app.state.read();
        assert!(state.session.is_none());
        assert_eq!(state.current_screen, Screen::Connect);
        assert_eq!(
            state.connect_error.as_deref(),
            Some("Request was rejected in the wallet")
        );
    }

    #[test]
    fn connect_to_wrong_network_is_refused() {
        let (mut app, _) = app_with_mock();
        app.state.write().connecting = true;

        app.handle_event(AppEvent::ConnectFinished(Ok((MOCK_ACCOUNT.to_string(), 1))));

        let state = app.state.read();
        assert!(state.session.is_none());
        assert!(state
            .connect_error
            .as_deref()
            .is_some_and(|message| message.contains("chain 1")));
    }

    #[test]
    fn account_switch_rebinds_session_and_drops_snapshots() {
        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);
        app.state.write().account.summary = Some(WalletSummary::default());

        let other = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
        app.handle_event(AppEvent::AccountChanged(Some(other.to_string())));

        let state = app.state.read();
        assert_eq!(state.session.as_ref().map(|s| s.account.as_str()), Some(other));
        assert!(state.account.summary.is_none(), "stale snapshot must be dropped");
    }

    #[test]
    fn network_change_kills_the_session_for_good() {
        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);

        app.handle_event(AppEvent::NetworkChanged(1));

        let state = app.state.read();
        assert!(state.session.is_none());
        assert_eq!(state.current_screen, Screen::Connect);
        assert!(state.session_fault.as_deref().is_some_and(|m| m.contains("Restart")));
    }

    #[test]
    fn fetch_failure_keeps_last_known_good_values() {
        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);

        let good = WalletSummary {
            token_balance: 42,
            ..WalletSummary::default()
        };
        let generation = app.state.write().account.poll.begin(0);
        app.handle_event(AppEvent::AccountSummary {
            generation,
            result: Ok(good),
        });
        assert_eq!(
            app.state.read().account.summary.as_ref().map(|s| s.token_balance),
            Some(42)
        );

        let generation = app.state.write().account.poll.begin(0);
        app.handle_event(AppEvent::AccountSummary {
            generation,
            result: Err(ChainError::Transport("connection refused".to_string())),
        });
        // The view keeps displaying the last successful snapshot.
        assert_eq!(
            app.state.read().account.summary.as_ref().map(|s| s.token_balance),
            Some(42)
        );
    }

    #[test]
    fn history_results_are_sorted_on_apply() {
        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);

        let entries = vec![
            crate::services::chain::HistoryEntry {
                timestamp: 100,
                kind: "deposit".to_string(),
                amount: 1,
            },
            crate::services::chain::HistoryEntry {
                timestamp: 300,
                kind: "withdraw".to_string(),
                amount: 2,
            },
            crate::services::chain::HistoryEntry {
                timestamp: 200,
                kind: "claim".to_string(),
                amount: 3,
            },
        ];
        let generation = app.state.write().history.poll.begin(0);
        app.handle_event(AppEvent::HistoryFetched {
            generation,
            result: Ok(entries),
        });

        let state = app.state.read();
        let timestamps: Vec<i64> = state.history.entries.iter().map(|e| e.timestamp).collect();
        assert_eq!(timestamps, vec![300, 200, 100], "newest first by default");
    }

    #[test]
    fn stale_summary_results_are_discarded() {
        let (mut app, _) = app_with_mock();
        connect(&app, MOCK_ACCOUNT);

        // A fetch from a previous life of the view.
        let old_generation = app.state.write().account.poll.begin(0);
        app.state.write().account.poll.reset();

        let mut stale = WalletSummary::default();
        stale.token_balance = 999;
        app.handle_event(AppEvent::AccountSummary {
            generation: old_generation,
            result: Ok(stale),
        });

        assert!(app.state.read().account.summary.is_none());
    }
}
