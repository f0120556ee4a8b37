//! # Application Events
//!
//! Results of async work, sent from background tasks to the main thread
//! through the app's event channel.

use crate::app::state::{NftInventory, NotifyLevel, StakingSummary, WalletSummary};
use crate::core::error::ChainError;
use crate::services::chain::HistoryEntry;

/// A state-changing submission, used to route results back to its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Deposit,
    Withdraw,
    ClaimReward,
    StakeNft(u64),
    UnstakeNft(u64),
    Faucet,
    SetBaseApr,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Deposit => "Deposit",
            ActionKind::Withdraw => "Withdrawal",
            ActionKind::ClaimReward => "Reward claim",
            ActionKind::StakeNft(_) => "NFT stake",
            ActionKind::UnstakeNft(_) => "NFT unstake",
            ActionKind::Faucet => "Faucet claim",
            ActionKind::SetBaseApr => "APR update",
        }
    }
}

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Wallet connection attempt finished: account and chain id on success
    ConnectFinished(Result<(String, u64), ChainError>),
    /// The wallet agent reports a different (or no) selected account
    AccountChanged(Option<String>),
    /// The wallet agent reports a different chain id
    NetworkChanged(u64),
    /// Account summary poll finished
    AccountSummary {
        generation: u64,
        result: Result<WalletSummary, ChainError>,
    },
    /// Staking summary poll finished
    StakingSummary {
        generation: u64,
        result: Result<StakingSummary, ChainError>,
    },
    /// NFT inventory scan finished
    NftInventoryFetched {
        generation: u64,
        result: Result<NftInventory, ChainError>,
    },
    /// Transaction history page fetch finished
    HistoryFetched {
        generation: u64,
        result: Result<Vec<HistoryEntry>, ChainError>,
    },
    /// A state-changing submission reached a final outcome (tx hash on success)
    ActionFinished {
        action: ActionKind,
        result: Result<String, ChainError>,
    },
    /// Free-form toast from a background task
    Notify(NotifyLevel, String),
}
