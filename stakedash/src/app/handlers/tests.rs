//! Flow tests for the submission handlers, driven against the recording
//! mock chain. These cover the load-bearing behaviors: call ordering,
//! local-rejection short-circuits, refresh propagation, and the
//! session-empty guards.

use crate::app::events::{ActionKind, AppEvent};
use crate::app::handlers::{faucet, nft, session, stake};
use crate::app::state::{
    AppState, NftInventory, NotifyLevel, Screen, Session, WalletSummary,
};
use crate::app::{tasks, App};
use crate::config::AppConfig;
use crate::core::service::mock::{MockChain, MOCK_ACCOUNT, MOCK_STAKING};
use crate::services::chain::StakePosition;
use std::sync::Arc;

const ONE: u128 = 10u128.pow(18);

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

fn connected_app(chain: Arc<MockChain>) -> App {
    let app = App::with_chain(test_config(), chain);
    let mut state = app.state.write();
    state.session = Some(Session {
        account: MOCK_ACCOUNT.to_string(),
        chain_id: 97,
    });
    state.current_screen = Screen::Account;
    drop(state);
    app
}

fn summary(token_balance: u128, withdrawable: u128, lock_end_time: i64) -> WalletSummary {
    WalletSummary {
        token_balance,
        withdrawable,
        stake: StakePosition {
            amount: 0,
            pending_rewards: ONE,
            lock_end_time,
        },
        ..WalletSummary::default()
    }
}

fn set_summary(app: &App, value: WalletSummary) {
    app.state.write().account.summary = Some(value);
}

async fn recv_action(app: &App) -> (ActionKind, Result<String, crate::core::error::ChainError>) {
    loop {
        match app.event_rx.recv().await.expect("event channel open") {
            AppEvent::ActionFinished { action, result } => return (action, result),
            _ => continue,
        }
    }
}

fn error_toasts(state: &AppState) -> Vec<String> {
    state
        .pending_notifications
        .iter()
        .filter(|(level, _)| *level == NotifyLevel::Error)
        .map(|(_, message)| message.clone())
        .collect()
}

// --- deposit ---

#[tokio::test]
async fn deposit_submits_exactly_one_approve_then_one_deposit() {
    let chain = MockChain::with_token_balance(100 * ONE);
    let tx = stake::submit_deposit(&chain, MOCK_STAKING, 50 * ONE)
        .await
        .expect("deposit succeeds");
    assert!(tx.starts_with("0xtx"));
    assert_eq!(chain.submissions(), vec!["token_approve", "staking_deposit"]);
}

#[tokio::test]
async fn invalid_deposit_inputs_never_reach_the_network() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    set_summary(&app, summary(100 * ONE, 0, 0));

    for input in ["", "   ", "0", "-5", "abc", "1e3", "101"] {
        app.state.write().account.deposit_input = input.to_string();
        app.handle_deposit_click();
        assert!(
            chain.recorded().is_empty(),
            "input {input:?} must be rejected before any call"
        );
        assert!(!app.state.read().account.deposit_busy);
    }
    assert!(!error_toasts(&app.state.read()).is_empty());
}

#[tokio::test]
async fn valid_deposit_confirms_and_bumps_the_refresh_epoch() {
    let chain = Arc::new(MockChain::with_token_balance(100 * ONE));
    let mut app = connected_app(chain.clone());
    set_summary(&app, summary(100 * ONE, 0, 0));
    app.state.write().account.deposit_input = "50".to_string();

    app.handle_deposit_click();
    assert!(app.state.read().account.deposit_busy);

    let (action, result) = recv_action(&app).await;
    assert_eq!(action, ActionKind::Deposit);
    let tx_hash = result.expect("deposit succeeds");

    app.handle_event(AppEvent::ActionFinished {
        action,
        result: Ok(tx_hash),
    });
    let state = app.state.read();
    assert_eq!(state.refresh_epoch, 1, "exactly one increment per success");
    assert!(state.account.deposit_input.is_empty());
    assert!(!state.account.deposit_busy);
}

#[tokio::test]
async fn deposit_scenario_moves_balance_into_stake() {
    let chain = MockChain::with_token_balance(100 * ONE);
    stake::submit_deposit(&chain, MOCK_STAKING, 50 * ONE)
        .await
        .expect("deposit succeeds");

    let refreshed = tasks::wallet::fetch_summary(&chain, MOCK_ACCOUNT)
        .await
        .expect("summary fetch succeeds");
    assert_eq!(refreshed.token_balance, 50 * ONE);
    assert_eq!(refreshed.stake.amount, 50 * ONE);
}

#[tokio::test]
async fn failed_deposit_surfaces_classified_error() {
    let chain = Arc::new(MockChain::with_token_balance(100 * ONE));
    *chain.fail_next_submit.lock().unwrap() = Some(
        crate::core::error::ChainError::from_rpc(3, "ERC20: transfer amount exceeds allowance".into()),
    );
    let mut app = connected_app(chain.clone());
    set_summary(&app, summary(100 * ONE, 0, 0));
    app.state.write().account.deposit_input = "50".to_string();

    app.handle_deposit_click();
    let (action, result) = recv_action(&app).await;
    assert!(result.is_err());
    app.handle_event(AppEvent::ActionFinished { action, result });

    let state = app.state.read();
    assert_eq!(state.refresh_epoch, 0);
    assert_eq!(state.account.deposit_input, "50");
    assert!(error_toasts(&state)
        .iter()
        .any(|m| m.contains("Insufficient allowance")));
}

// --- withdraw / claim ---

#[tokio::test]
async fn withdraw_is_rejected_locally_while_locked() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    let future = chrono::Utc::now().timestamp() + 3_600;
    set_summary(&app, summary(0, 50 * ONE, future));
    app.state.write().account.withdraw_input = "10".to_string();

    app.handle_withdraw_click();

    assert!(chain.recorded().is_empty());
    let state = app.state.read();
    assert!(!state.account.withdraw_busy);
    assert!(error_toasts(&state).iter().any(|m| m.contains("locked")));
}

#[tokio::test]
async fn withdraw_over_withdrawable_is_rejected_locally() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    set_summary(&app, summary(0, 10 * ONE, 0));
    app.state.write().account.withdraw_input = "11".to_string();

    app.handle_withdraw_click();
    assert!(chain.recorded().is_empty());
}

#[tokio::test]
async fn withdraw_after_lock_expiry_submits_one_call() {
    let chain = Arc::new(MockChain::default());
    *chain.withdrawable.lock().unwrap() = 50 * ONE;
    *chain.staked_amount.lock().unwrap() = 50 * ONE;
    let mut app = connected_app(chain.clone());
    set_summary(&app, summary(0, 50 * ONE, 0));
    app.state.write().account.withdraw_input = "25".to_string();

    app.handle_withdraw_click();
    let (action, result) = recv_action(&app).await;
    assert_eq!(action, ActionKind::Withdraw);
    assert!(result.is_ok());
    assert_eq!(chain.submissions(), vec!["staking_withdraw"]);
}

#[tokio::test]
async fn claim_is_rejected_locally_while_locked() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    let future = chrono::Utc::now().timestamp() + 3_600;
    set_summary(&app, summary(0, 0, future));

    app.handle_claim_click();
    assert!(chain.recorded().is_empty());
}

// --- faucet ---

#[tokio::test]
async fn faucet_on_cooldown_is_rejected_locally() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    let mut value = summary(0, 0, 0);
    value.faucet_remaining_secs = 120;
    set_summary(&app, value);

    app.handle_faucet_click();

    assert!(chain.recorded().is_empty());
    assert!(!app.state.read().account.faucet_busy);
}

#[tokio::test]
async fn faucet_when_available_claims_once() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    set_summary(&app, summary(0, 0, 0));

    app.handle_faucet_click();
    let (action, result) = recv_action(&app).await;
    assert_eq!(action, ActionKind::Faucet);
    assert!(result.is_ok());
    assert_eq!(chain.submissions(), vec!["token_faucet"]);
    assert_eq!(
        *chain.token_balance.lock().unwrap(),
        chain.faucet_amount_units
    );
}

// --- NFTs ---

#[tokio::test]
async fn stake_nft_approves_custody_then_stakes() {
    let chain = MockChain::default();
    chain
        .nft_owners
        .lock()
        .unwrap()
        .insert(3, MOCK_ACCOUNT.to_string());
    let tx = nft::submit_stake_nft(&chain, MOCK_STAKING, 3)
        .await
        .expect("stake succeeds");
    assert!(tx.starts_with("0xtx"));
    assert_eq!(chain.submissions(), vec!["nft_approve", "staking_stakeNft"]);
}

#[tokio::test]
async fn stake_nft_outside_displayed_inventory_is_rejected() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    app.state.write().nfts.inventory = Some(NftInventory {
        unstaked: vec![1, 2],
        staked: vec![],
    });

    app.handle_stake_nft_click(3);

    assert!(chain.recorded().is_empty());
    assert!(app.state.read().nfts.busy_token.is_none());
}

#[tokio::test]
async fn unstake_nft_requires_contract_custody_in_display() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    app.state.write().nfts.inventory = Some(NftInventory {
        unstaked: vec![1],
        staked: vec![12],
    });

    app.handle_unstake_nft_click(1);
    assert!(chain.recorded().is_empty());

    app.handle_unstake_nft_click(12);
    let (action, result) = recv_action(&app).await;
    assert_eq!(action, ActionKind::UnstakeNft(12));
    assert!(result.is_ok());
    assert_eq!(chain.submissions(), vec!["staking_unstakeNft"]);
}

// --- admin ---

#[tokio::test]
async fn apr_update_validates_range_locally() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());

    for input in ["", "150", "100.01", "8.125", "abc"] {
        app.state.write().admin.apr_input = input.to_string();
        app.handle_update_apr_click();
        assert!(
            chain.recorded().is_empty(),
            "APR input {input:?} must be rejected locally"
        );
    }
}

#[tokio::test]
async fn apr_update_by_admin_lands_in_basis_points() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());
    app.state.write().admin.apr_input = "12.5".to_string();

    app.handle_update_apr_click();
    let (action, result) = recv_action(&app).await;
    assert_eq!(action, ActionKind::SetBaseApr);
    assert!(result.is_ok());
    assert_eq!(chain.submissions(), vec!["staking_setBaseApr"]);
    assert_eq!(*chain.base_apr_bps.lock().unwrap(), 1250);
}

#[tokio::test]
async fn apr_update_by_non_admin_is_rejected_locally() {
    let chain = Arc::new(MockChain::default());
    let app = App::with_chain(
        AppConfig {
            admin_address: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string(),
            ..test_config()
        },
        chain.clone(),
    );
    {
        let mut state = app.state.write();
        state.session = Some(Session {
            account: MOCK_ACCOUNT.to_string(),
            chain_id: 97,
        });
        state.admin.apr_input = "10".to_string();
    }

    let mut app = app;
    app.handle_update_apr_click();
    assert!(chain.recorded().is_empty());
    assert!(error_toasts(&app.state.read())
        .iter()
        .any(|m| m.contains("contract owner")));
}

// --- session guards and polling ---

#[tokio::test]
async fn without_a_session_no_action_or_poll_touches_the_network() {
    let chain = Arc::new(MockChain::default());
    let mut app = App::with_chain(test_config(), chain.clone());

    app.handle_deposit_click();
    app.handle_withdraw_click();
    app.handle_claim_click();
    app.handle_faucet_click();
    app.handle_stake_nft_click(1);
    app.handle_unstake_nft_click(1);
    app.handle_update_apr_click();
    app.on_tick();

    assert!(chain.recorded().is_empty());
    assert!(app.state.read().pending_notifications.is_empty());
}

#[tokio::test]
async fn session_arrival_triggers_every_view_once() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());

    app.on_tick();

    // Four views, four results.
    let mut kinds = Vec::new();
    for _ in 0..4 {
        match app.event_rx.recv().await.expect("event channel open") {
            AppEvent::AccountSummary { .. } => kinds.push("account"),
            AppEvent::StakingSummary { .. } => kinds.push("staking"),
            AppEvent::NftInventoryFetched { .. } => kinds.push("nfts"),
            AppEvent::HistoryFetched { .. } => kinds.push("history"),
            other => panic!("unexpected event {other:?}"),
        }
    }
    kinds.sort_unstable();
    assert_eq!(kinds, vec!["account", "history", "nfts", "staking"]);
}

#[tokio::test]
async fn epoch_change_refetches_before_the_next_timer_tick() {
    let chain = Arc::new(MockChain::default());
    let mut app = connected_app(chain.clone());

    // First round: fetch, deliver, apply.
    app.on_tick();
    for _ in 0..4 {
        let event = app.event_rx.recv().await.expect("event channel open");
        app.handle_event(event);
    }

    // Timers are nowhere near due; nothing new may start.
    let calls_after_first_round = chain.recorded().len();
    app.on_tick();
    assert!(app.event_rx.is_empty());
    assert_eq!(chain.recorded().len(), calls_after_first_round);

    // A successful action moves the epoch: every view refetches out of band.
    app.handle_event(AppEvent::ActionFinished {
        action: ActionKind::ClaimReward,
        result: Ok("0xtx9999".to_string()),
    });
    app.on_tick();
    for _ in 0..4 {
        app.event_rx.recv().await.expect("event channel open");
    }
    assert!(chain.recorded().len() > calls_after_first_round);
}

// --- connection flow ---

#[tokio::test]
async fn connect_prompts_wallet_and_reads_chain_id() {
    let chain = MockChain::default();
    let (account, chain_id) = session::connect(&chain).await.expect("connect succeeds");
    assert_eq!(account, MOCK_ACCOUNT);
    assert_eq!(chain_id, 97);
    assert_eq!(
        chain.recorded(),
        vec!["wallet_requestAccounts", "wallet_chainId"]
    );
}

#[tokio::test]
async fn connect_click_populates_session_through_the_event_loop() {
    let chain = Arc::new(MockChain::default());
    let mut app = App::with_chain(test_config(), chain.clone());

    app.handle_connect_click();
    assert!(app.state.read().connecting);

    let event = app.event_rx.recv().await.expect("event channel open");
    app.handle_event(event);

    let state = app.state.read();
    assert!(state.is_connected());
    assert!(state.is_admin());
    assert_eq!(state.current_screen, Screen::Account);
}

#[tokio::test]
async fn faucet_submit_helper_waits_for_confirmation() {
    let chain = MockChain::default();
    faucet::submit_faucet(&chain).await.expect("faucet succeeds");
    assert!(chain.count_of("chain_getTransactionReceipt") >= 1);
}
