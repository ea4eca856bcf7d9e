//! Chain client and contract views for forked-chain vault checks.
//!
//! This crate wraps a forked test chain's JSON-RPC endpoint: ERC20 reads
//! and approvals, vault metadata and owner-gated enter/exit calls, and the
//! anvil impersonation control channel used to act as the funding address
//! and the vault owner.
//!
//! # Example
//!
//! ```no_run
//! use alloy::primitives::{address, U256};
//! use vault_check_contracts::{AssetLedger, ChainClient};
//!
//! #[tokio::main]
//! async fn main() -> vault_check_contracts::Result<()> {
//!     let client = ChainClient::new(
//!         "http://localhost:8545",
//!         "0x...", // private key
//!     )?;
//!
//!     let token = address!("8236a87084f8b84306f72007f36f2618a5634494");
//!     let ledger = AssetLedger::new(&client, token);
//!     let balance = ledger.balance_of(client.signer_address()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod erc20;
pub mod error;
pub mod ledger;
pub mod provider;
pub mod vault;

pub use client::{ChainClient, ImpersonationSession};
pub use error::{ContractError, Result};
pub use ledger::AssetLedger;
pub use provider::{ControlProvider, HttpProvider};
pub use vault::{VaultClient, VaultSnapshot};
