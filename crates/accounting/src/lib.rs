//! Share accounting for vault deposit/withdraw checks.
//!
//! This crate computes the proportional share amounts a vault is expected
//! to mint on deposit and the asset amounts it is expected to release on
//! withdrawal. All arithmetic is exact unsigned integer math; callers are
//! responsible for supplying supply/asset readings taken as close together
//! as possible, since a stale ratio invalidates the quote.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::U256;
//! use vault_check_accounting::quote_mint;
//!
//! // First deposit into an empty vault mints 1:1.
//! let shares = quote_mint(U256::from(10), U256::ZERO, U256::ZERO).unwrap();
//! assert_eq!(shares, U256::from(10));
//! ```

pub mod error;
pub mod shares;

pub use error::AccountingError;
pub use shares::{quote_burn, quote_mint};
