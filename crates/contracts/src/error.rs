//! Error types for the contracts crate.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors that can occur when using the chain client and contract views.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Transaction failed or reverted. A vault rejecting a non-owner
    /// caller surfaces here as a reverted receipt.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Insufficient balance.
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: U256, need: U256 },

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Impersonation control call failed. Either the target chain is not
    /// a test chain that supports impersonation, or session discipline
    /// was violated.
    #[error("Impersonation control failed: {0}")]
    ControlChannel(String),
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
