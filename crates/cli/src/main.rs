//! vault-check - deposit/withdraw integration check on a forked chain.

mod cli;
mod output;
mod scenario;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use clap::Parser;
use vault_check_contracts::ContractError;

use cli::Cli;
use scenario::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let vault: Address = cli.vault.parse().context("Invalid vault address")?;
    let config = Config {
        rpc_url: cli.rpc_url,
        private_key: cli.private_key,
        vault,
    };

    if let Err(err) = scenario::run(&config).await {
        // The funding guard is a planned terminal outcome, not a crash.
        if let Some(ContractError::InsufficientBalance { have, need }) =
            err.downcast_ref::<ContractError>()
        {
            eprintln!("Funding address has insufficient funds: have {have}, need {need}");
            std::process::exit(1);
        }
        return Err(err);
    }

    Ok(())
}
