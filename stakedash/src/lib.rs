//! # Token Staking Dashboard - Library Root
//!
//! A native desktop dashboard for a token-staking smart contract: connect a
//! wallet, watch balances/stake/rewards, and submit
//! deposit/withdraw/claim/stake-NFT transactions. All staking logic lives in
//! the external contract; this application renders its state and submits
//! calls through a wallet-agent node.
//!
//! ## Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │               stakedash (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  egui/eframe   - Immediate-mode native GUI             │
//! │  Tokio         - Async runtime (network tasks)         │
//! │  Reqwest       - HTTP JSON-RPC client                  │
//! │  tracing       - Structured logging                    │
//! └────────────────────────┬───────────────────────────────┘
//!                          │ JSON-RPC over HTTP
//!                          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Wallet-agent node (signing identity + user prompts)   │
//! │  fronting the staking / token / NFT contracts          │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state, events, action handlers, polling tasks
//! - **core**: error taxonomy and the `ChainService` seam
//! - **services**: the JSON-RPC chain client
//! - **ui**: screens, widgets, theme
//! - **utils**: validation, tokio runtime bridge
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Concurrency Model
//!
//! The main thread renders and mutates state; async tasks do network I/O
//! only and report back through an event channel drained once per frame.
//! State lives behind `Arc<parking_lot::RwLock<_>>`, locks held briefly and
//! never across an await.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, ChainError, Result};
