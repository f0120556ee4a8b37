//! # Error Types
//!
//! Two layers of errors:
//!
//! - [`ChainError`]: everything that can go wrong talking to the wallet
//!   agent and the contracts behind it, classified into typed categories so
//!   the UI can show stable messages instead of matching raw node output.
//! - [`AppError`]: application-level wrapper covering chain, validation and
//!   state failures.
//!
//! Classification prefers structured RPC error codes, then falls back to the
//! revert-reason substrings the contracts are known to emit, and finally
//! passes unrecognized messages through verbatim.

use thiserror::Error;

/// JSON-RPC error code sent by the wallet agent when the user declines a
/// prompt (EIP-1193 userRejectedRequest).
pub const USER_REJECTED_CODE: i64 = 4001;

/// Failure talking to the chain through the wallet agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The user declined the request in the wallet prompt.
    #[error("request rejected in the wallet")]
    Rejected,

    /// Token balance below the requested amount.
    #[error("insufficient token balance")]
    InsufficientBalance,

    /// Spender allowance below the requested amount.
    #[error("allowance exceeded")]
    AllowanceExceeded,

    /// Account cannot cover gas for the transaction.
    #[error("insufficient funds for gas")]
    InsufficientFunds,

    /// Contract execution reverted with a reason string.
    #[error("execution reverted: {0}")]
    Reverted(String),

    /// Ownership query for a token id that was never minted.
    #[error("nonexistent token")]
    NonexistentToken,

    /// Caller lacks the privilege the contract requires.
    #[error("not authorized: {0}")]
    NotAuthorized(String),

    /// Transaction was included but its receipt reports failure.
    #[error("transaction failed on-chain")]
    TxFailed,

    /// Receipt never reached a final status within the polling window.
    #[error("timed out waiting for confirmation")]
    ConfirmationTimeout,

    /// HTTP-level failure before any RPC response was decoded.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response arrived but did not match the expected shape.
    #[error("malformed response: {0}")]
    InvalidResponse(String),

    /// RPC error that matched no known category; message passes through.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl ChainError {
    /// Classify a JSON-RPC error object into a typed category.
    pub fn from_rpc(code: i64, message: String) -> Self {
        if code == USER_REJECTED_CODE {
            return ChainError::Rejected;
        }

        let lower = message.to_lowercase();
        if lower.contains("insufficient funds") {
            ChainError::InsufficientFunds
        } else if lower.contains("exceeds allowance") || lower.contains("insufficient allowance") {
            ChainError::AllowanceExceeded
        } else if lower.contains("insufficient balance") {
            ChainError::InsufficientBalance
        } else if lower.contains("nonexistent token") {
            ChainError::NonexistentToken
        } else if lower.contains("caller is not the owner") || lower.contains("not authorized") {
            ChainError::NotAuthorized(message)
        } else if lower.contains("execution reverted") {
            ChainError::Reverted(message)
        } else {
            ChainError::Rpc { code, message }
        }
    }

    /// Message suitable for a toast. Unclassified errors are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ChainError::Rejected => "Request was rejected in the wallet".to_string(),
            ChainError::InsufficientBalance => "Insufficient token balance".to_string(),
            ChainError::AllowanceExceeded => {
                "Insufficient allowance. Please approve more tokens.".to_string()
            }
            ChainError::InsufficientFunds => {
                "Insufficient funds for gas * price + value".to_string()
            }
            ChainError::Reverted(_) => {
                "Transaction reverted. Check if tokens are still locked or if there's insufficient balance."
                    .to_string()
            }
            ChainError::NonexistentToken => "Token does not exist".to_string(),
            ChainError::NotAuthorized(_) => {
                "Only the contract owner can perform this action".to_string()
            }
            ChainError::TxFailed => "Transaction failed on-chain".to_string(),
            ChainError::ConfirmationTimeout => {
                "Timed out waiting for the transaction to confirm".to_string()
            }
            ChainError::Rpc { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failure from the chain layer.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// User input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// Inconsistent application state (e.g. an action without a session).
    #[error("state error: {0}")]
    State(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
