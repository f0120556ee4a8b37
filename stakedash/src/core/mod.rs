//! # Core Types
//!
//! Error taxonomy and the service trait that decouples the application from
//! the concrete RPC client.

pub mod error;
pub mod service;

pub use error::{AppError, ChainError, Result};
pub use service::ChainService;
