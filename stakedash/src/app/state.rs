//! # Application State Types
//!
//! Screens, the wallet session, per-view snapshots, and the polling
//! bookkeeping that coalesces refresh triggers.

use crate::config::AppConfig;
use crate::core::service::ChainService;
use crate::services::chain::{HistoryEntry, StakePosition};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Wallet connection screen
    Connect,
    /// Account overview with deposit/withdraw/claim/faucet forms
    Account,
    /// Staking summary (APR, staked amount, rewards)
    Staking,
    /// NFT certificate inventory (staked and unstaked)
    Nfts,
    /// On-contract transaction history
    History,
    /// Base APR administration (admin account only)
    Admin,
}

impl Screen {
    /// All screens in Tab navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Connect,
            Screen::Account,
            Screen::Staking,
            Screen::Nfts,
            Screen::History,
            Screen::Admin,
        ]
    }

    /// Screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Connect => "Connect Wallet",
            Screen::Account => "My Account",
            Screen::Staking => "Staking Overview",
            Screen::Nfts => "NFT Certificates",
            Screen::History => "Transaction History",
            Screen::Admin => "Admin Panel",
        }
    }

    /// Whether a screen is meaningless without a connected wallet
    pub fn requires_session(screen: Screen) -> bool {
        !matches!(screen, Screen::Connect)
    }
}

/// The live wallet connection: which account the wallet agent is signing for
/// and which chain it is pointed at. The RPC handle itself is
/// application-scoped ([`AppState::chain`]); the session only records the
/// identity it is currently bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account: String,
    pub chain_id: u64,
}

/// Per-view polling bookkeeping.
///
/// Guarantees encoded here:
/// - at most one fetch in flight per view (`in_flight`),
/// - a trigger arriving mid-fetch coalesces into exactly one follow-up
///   (`dirty`), it is never queued,
/// - a result that lost the race to a newer one is discarded
///   (`generation` vs `applied_generation`).
#[derive(Debug, Clone)]
pub struct PollState {
    in_flight: bool,
    dirty: bool,
    last_poll: Option<Instant>,
    seen_epoch: u64,
    generation: u64,
    applied_generation: u64,
}

impl Default for PollState {
    fn default() -> Self {
        Self {
            in_flight: false,
            dirty: false,
            last_poll: None,
            seen_epoch: 0,
            generation: 0,
            applied_generation: 0,
        }
    }
}

impl PollState {
    /// Whether a fetch should start now. `cadence` of `None` means the view
    /// is signal-driven only (refresh epoch, session arrival, manual).
    pub fn due(&self, cadence: Option<Duration>, epoch: u64) -> bool {
        if self.in_flight {
            return false;
        }
        match self.last_poll {
            None => true,
            Some(last) => {
                if self.seen_epoch != epoch {
                    return true;
                }
                match cadence {
                    Some(interval) => last.elapsed() >= interval,
                    None => false,
                }
            }
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Record the start of a fetch; returns its generation number.
    pub fn begin(&mut self, epoch: u64) -> u64 {
        self.in_flight = true;
        self.generation += 1;
        self.seen_epoch = epoch;
        self.last_poll = Some(Instant::now());
        self.generation
    }

    /// Mark that a trigger arrived while a fetch was outstanding.
    pub fn mark_dirty(&mut self) {
        if self.in_flight {
            self.dirty = true;
        }
    }

    /// Scheduler entry point. Returns `true` when a new fetch should start
    /// now; an epoch trigger landing mid-fetch is coalesced instead.
    pub fn poll_trigger(&mut self, cadence: Option<Duration>, epoch: u64) -> bool {
        if self.due(cadence, epoch) {
            return true;
        }
        if self.in_flight && self.seen_epoch != epoch {
            self.dirty = true;
        }
        false
    }

    /// Record fetch completion. Returns `false` when the result is stale
    /// (an overlapping newer fetch already applied) and must be discarded.
    pub fn finish(&mut self, generation: u64) -> bool {
        self.in_flight = false;
        if generation < self.applied_generation {
            return false;
        }
        self.applied_generation = generation;
        true
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Forget all schedule state and invalidate any outstanding fetch, so
    /// results from a previous account or session can never land here.
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.dirty = false;
        self.last_poll = None;
        self.seen_epoch = 0;
        self.generation += 1;
        self.applied_generation = self.generation;
    }
}

/// Snapshot rendered by the account screen, rebuilt on every poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSummary {
    pub token_balance: u128,
    pub nft_balance: u64,
    pub stake: StakePosition,
    pub withdrawable: u128,
    /// Seconds until the faucet can be used again; zero when available.
    pub faucet_remaining_secs: i64,
    pub faucet_amount: u128,
}

impl WalletSummary {
    /// Whether withdrawals are still locked at unix time `now`.
    pub fn is_locked(&self, now: i64) -> bool {
        self.stake.lock_end_time > now
    }
}

/// Snapshot rendered by the staking screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StakingSummary {
    pub base_apr_bps: u32,
    pub staked_amount: u128,
    pub pending_rewards: u128,
    pub lock_end_time: i64,
    pub staked_nft_count: u64,
}

/// Bonus APR granted per staked certificate NFT, in basis points.
pub const NFT_APR_BONUS_BPS: u32 = 200;

impl StakingSummary {
    /// APR actually in effect: base plus the per-NFT bonus.
    pub fn effective_apr_bps(&self) -> u32 {
        self.base_apr_bps + NFT_APR_BONUS_BPS * self.staked_nft_count as u32
    }
}

/// NFT membership, re-derived from on-chain ownership on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftInventory {
    /// Owned directly by the account.
    pub unstaked: Vec<u64>,
    /// Held in custody by the staking contract on the account's behalf.
    pub staked: Vec<u64>,
}

/// Account screen: summary snapshot plus the deposit/withdraw forms.
#[derive(Debug, Clone, Default)]
pub struct AccountView {
    pub summary: Option<WalletSummary>,
    pub poll: PollState,
    pub deposit_input: String,
    pub withdraw_input: String,
    pub deposit_busy: bool,
    pub withdraw_busy: bool,
    pub claim_busy: bool,
    pub faucet_busy: bool,
}

impl AccountView {
    /// Clear everything but the poll's generation counters, which must keep
    /// growing so an outstanding fetch is recognized as stale.
    fn reset(&mut self) {
        self.summary = None;
        self.poll.reset();
        self.deposit_input.clear();
        self.withdraw_input.clear();
        self.deposit_busy = false;
        self.withdraw_busy = false;
        self.claim_busy = false;
        self.faucet_busy = false;
    }
}

#[derive(Debug, Clone, Default)]
pub struct StakingView {
    pub summary: Option<StakingSummary>,
    pub poll: PollState,
}

impl StakingView {
    fn reset(&mut self) {
        self.summary = None;
        self.poll.reset();
    }
}

#[derive(Debug, Clone, Default)]
pub struct NftView {
    pub inventory: Option<NftInventory>,
    pub poll: PollState,
    /// Token id with a stake/unstake submission outstanding.
    pub busy_token: Option<u64>,
}

impl NftView {
    fn reset(&mut self) {
        self.inventory = None;
        self.poll.reset();
        self.busy_token = None;
    }
}

/// Page sizes offered by the history screen.
pub const HISTORY_PAGE_SIZES: &[usize] = &[5, 10, 25];

#[derive(Debug, Clone)]
pub struct HistoryView {
    pub entries: Vec<HistoryEntry>,
    pub poll: PollState,
    pub page: usize,
    pub page_size: usize,
    pub sort_descending: bool,
}

impl Default for HistoryView {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            poll: PollState::default(),
            page: 0,
            page_size: 10,
            sort_descending: true,
        }
    }
}

impl HistoryView {
    fn reset(&mut self) {
        self.entries.clear();
        self.poll.reset();
        self.page = 0;
        self.page_size = 10;
        self.sort_descending = true;
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminView {
    pub apr_input: String,
    pub busy: bool,
}

/// Toast severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Global application state.
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Deployment configuration (endpoint, contract addresses, admin)
    pub config: AppConfig,
    /// Contract-call handle; the only door to the outside world
    pub chain: Arc<dyn ChainService>,
    /// Live wallet session, if connected
    pub session: Option<Session>,
    /// Bumped on every connect/disconnect; background watchers exit when
    /// their captured nonce no longer matches
    pub session_nonce: u64,
    /// Set when the session died in a way only a restart recovers from
    pub session_fault: Option<String>,
    /// A connect request is outstanding
    pub connecting: bool,
    /// Last connection failure, shown inline on the connect screen
    pub connect_error: Option<String>,
    /// Invalidation counter: successful actions increment it, polling views
    /// re-fetch when it changes
    pub refresh_epoch: u64,
    pub account: AccountView,
    pub staking: StakingView,
    pub nfts: NftView,
    pub history: HistoryView,
    pub admin: AdminView,
    /// Toasts waiting to be displayed by the UI layer
    pub pending_notifications: Vec<(NotifyLevel, String)>,
}

impl AppState {
    pub fn new(config: AppConfig, chain: Arc<dyn ChainService>) -> Self {
        Self {
            current_screen: Screen::Connect,
            config,
            chain,
            session: None,
            session_nonce: 0,
            session_fault: None,
            connecting: false,
            connect_error: None,
            refresh_epoch: 0,
            account: AccountView::default(),
            staking: StakingView::default(),
            nfts: NftView::default(),
            history: HistoryView::default(),
            admin: AdminView::default(),
            pending_notifications: Vec::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the connected account is the configured APR administrator.
    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.account.eq_ignore_ascii_case(&self.config.admin_address))
            .unwrap_or(false)
    }

    /// Queue a toast for the next frame.
    pub fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }

    /// Drop every view snapshot and invalidate outstanding fetches. Used on
    /// connect, disconnect and account switch so no stale account's data
    /// survives the transition.
    pub fn reset_views(&mut self) {
        self.account.reset();
        self.staking.reset();
        self.nfts.reset();
        self.history.reset();
        self.admin = AdminView::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_all_returns_navigation_order() {
        let screens = Screen::all();
        assert_eq!(screens.len(), 6);
        assert_eq!(screens[0], Screen::Connect);
        assert_eq!(screens[5], Screen::Admin);
    }

    #[test]
    fn screen_titles() {
        assert_eq!(Screen::Connect.title(), "Connect Wallet");
        assert_eq!(Screen::Account.title(), "My Account");
        assert_eq!(Screen::History.title(), "Transaction History");
    }

    #[test]
    fn only_connect_screen_works_without_a_session() {
        assert!(!Screen::requires_session(Screen::Connect));
        for screen in [Screen::Account, Screen::Staking, Screen::Nfts, Screen::History, Screen::Admin] {
            assert!(Screen::requires_session(screen));
        }
    }

    #[test]
    fn poll_state_is_due_when_never_polled() {
        let poll = PollState::default();
        assert!(poll.due(Some(Duration::from_secs(1)), 0));
        assert!(poll.due(None, 0));
    }

    #[test]
    fn poll_state_not_due_while_in_flight() {
        let mut poll = PollState::default();
        poll.begin(0);
        assert!(!poll.due(Some(Duration::from_secs(0)), 0));
        assert!(!poll.due(Some(Duration::from_secs(0)), 7));
    }

    #[test]
    fn epoch_change_forces_refetch_regardless_of_timer_phase() {
        let mut poll = PollState::default();
        let generation = poll.begin(0);
        assert!(poll.finish(generation));
        // Timer has definitely not elapsed, but the epoch moved.
        assert!(!poll.due(Some(Duration::from_secs(3600)), 0));
        assert!(poll.due(Some(Duration::from_secs(3600)), 1));
        // Signal-driven views refetch on epoch change too.
        assert!(poll.due(None, 1));
    }

    #[test]
    fn dirty_coalesces_triggers_during_flight() {
        let mut poll = PollState::default();
        let generation = poll.begin(0);
        poll.mark_dirty();
        poll.mark_dirty();
        assert!(poll.finish(generation));
        // Two triggers collapse into one follow-up.
        assert!(poll.take_dirty());
        assert!(!poll.take_dirty());
    }

    #[test]
    fn stale_results_are_discarded_after_reset() {
        let mut poll = PollState::default();
        let old_generation = poll.begin(0);
        // Account switches away mid-fetch.
        poll.reset();
        assert!(!poll.finish(old_generation), "result from before the reset must be dropped");
        // The next fetch proceeds normally.
        let new_generation = poll.begin(1);
        assert!(poll.finish(new_generation));
    }

    #[test]
    fn view_reset_invalidates_outstanding_fetches() {
        let mut view = AccountView::default();
        let generation = view.poll.begin(0);
        view.reset();
        assert!(
            !view.poll.finish(generation),
            "a fetch started before the reset must not apply after it"
        );
    }

    #[test]
    fn effective_apr_adds_nft_bonus() {
        let summary = StakingSummary {
            base_apr_bps: 800,
            staked_nft_count: 3,
            ..StakingSummary::default()
        };
        assert_eq!(summary.effective_apr_bps(), 800 + 3 * NFT_APR_BONUS_BPS);
    }

    #[test]
    fn lock_check_compares_against_now() {
        let summary = WalletSummary {
            stake: StakePosition {
                lock_end_time: 1_000,
                ..StakePosition::default()
            },
            ..WalletSummary::default()
        };
        assert!(summary.is_locked(999));
        assert!(!summary.is_locked(1_000));
        assert!(!summary.is_locked(1_001));
    }
}
