//! CLI argument definitions using clap.

use clap::Parser;

/// Vault deposit/withdraw integration check.
///
/// Runs a single serial sequence against a forked test chain: fund the
/// test wallet by impersonating a known asset holder, deposit into the
/// vault as its owner, then withdraw the minted shares.
#[derive(Parser, Debug)]
#[command(name = "vault-check")]
#[command(about = "Deposit/withdraw integration check against a vault on a forked chain", long_about = None)]
pub struct Cli {
    /// JSON-RPC endpoint of the forked chain, e.g. a local anvil fork
    /// (can also use RPC_URL env var)
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Private key for the test wallet (can also use PRIVATE_KEY env var)
    #[arg(long, env = "PRIVATE_KEY")]
    pub private_key: String,

    /// Address of the vault under test (can also use VAULT_ADDRESS env var)
    #[arg(long, env = "VAULT_ADDRESS")]
    pub vault: String,
}
