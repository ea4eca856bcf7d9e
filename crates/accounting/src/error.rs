//! Error types for share accounting.

use thiserror::Error;

/// Errors that can occur when quoting share mints or burns.
///
/// These are contract violations on the caller's side, not recoverable
/// conditions: the orchestrator's bootstrap path guarantees they never
/// occur against a consistent chain view.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountingError {
    /// Total vault assets read as zero while shares are outstanding.
    #[error("total vault assets is zero while total share supply is {total_supply}")]
    ZeroTotalAssets { total_supply: alloy_primitives::U256 },

    /// Burn quote requested against a vault with no outstanding shares.
    #[error("total share supply is zero, nothing to burn against")]
    ZeroTotalSupply,

    /// Intermediate product exceeded 256 bits.
    #[error("intermediate multiplication overflowed")]
    Overflow,
}
