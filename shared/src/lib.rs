//! # Shared Wire Types
//!
//! This library defines the wire contract between the dashboard and the
//! wallet-agent node it talks to. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the JSON-RPC call surface
//!   - **[`dto::chain`]**: RPC envelope and transaction receipt types
//!   - **[`dto::staking`]**: Staking contract query/return shapes
//! - **[`units`]**: Fixed-point amount parsing/formatting and address display
//!
//! ## Wire Format
//!
//! Token amounts travel as decimal strings of base units (18 decimals) so the
//! JSON layer never loses precision; [`units::parse_units`] and
//! [`units::format_units`] convert between user-facing decimal notation and
//! `u128` base units.

pub mod dto;
pub mod units;

// Re-export commonly used types for convenience
pub use dto::*;
pub use units::*;
