//! The end-to-end check: report, fund, deposit, withdraw, report.
//!
//! Every step is awaited to confirmation before the next begins and any
//! failure aborts the run; there are no retries. The run mutates only the
//! forked chain's state, so re-running after a failure simply starts over.

use alloy_primitives::{address, Address, U256};
use anyhow::Result;
use colored::Colorize;
use vault_check_accounting::{quote_burn, quote_mint};
use vault_check_contracts::{AssetLedger, ChainClient, ContractError, VaultClient, VaultSnapshot};

use crate::output::{format_fixed6, format_units};

/// LBTC, the vault's underlying asset.
pub const UNDERLYING_ASSET: Address = address!("8236a87084f8b84306f72007f36f2618a5634494");

/// Known LBTC holder used to fund the test wallet via impersonation.
pub const FUNDING_ADDRESS: Address = address!("79851BB0db6b03F348fA9c98ef5D23AD3B03b014");

/// LBTC uses 8 decimal places.
const ASSET_DECIMALS: u8 = 8;

/// 0.01 LBTC in base units; both the funding transfer amount and the
/// minimum balance the funding address must hold.
const FUNDING_AMOUNT: U256 = U256::from_limbs([1_000_000, 0, 0, 0]);

/// 0.0000001 LBTC in base units, the deposit under test.
const DEPOSIT_AMOUNT: U256 = U256::from_limbs([10, 0, 0, 0]);

/// APY is not available on-chain; this figure comes from the Lombard
/// dashboard.
const DASHBOARD_APY: &str = "1.2%";

/// Configuration assembled once at startup and passed into every step.
pub struct Config {
    pub rpc_url: String,
    pub private_key: String,
    pub vault: Address,
}

/// Runs the full check sequence against the configured vault.
pub async fn run(config: &Config) -> Result<()> {
    let client = ChainClient::new(&config.rpc_url, &config.private_key)?;
    let ledger = AssetLedger::new(&client, UNDERLYING_ASSET);
    let vault = VaultClient::new(&client, config.vault);

    let snapshot = report_summary(&ledger, &vault).await?;
    fund_wallet(&client, &ledger).await?;

    let wallet = client.signer_address();
    let shares_before = vault.share_balance_of(wallet).await?;
    println!("\nWallet: {wallet}");
    println!(
        "Balance before: {}",
        format_fixed6(shares_before, snapshot.decimals)
    );

    let shares_after = deposit(&client, &ledger, &vault, &snapshot).await?;
    println!(
        "Balance after: {}",
        format_fixed6(shares_after, snapshot.decimals)
    );

    let shares_final = withdraw(&client, &ledger, &vault, &snapshot, shares_after).await?;
    println!(
        "Balance final: {}",
        format_fixed6(shares_final, snapshot.decimals)
    );
    println!("{}", "Complete!".green());

    Ok(())
}

/// Reads vault metadata and TVL and prints the run header.
async fn report_summary(
    ledger: &AssetLedger<'_>,
    vault: &VaultClient<'_>,
) -> Result<VaultSnapshot> {
    let snapshot = vault.metadata().await?;
    let tvl = ledger.balance_of(vault.address()).await?;
    let token_symbol = ledger.symbol().await?;
    let token_decimals = ledger.decimals().await?;

    println!("Vault: {}", snapshot.name);
    println!("APY: {DASHBOARD_APY}");
    println!("TVL: {} {}", format_units(tvl, ASSET_DECIMALS), token_symbol);
    println!("Token: {} ({} decimals)", token_symbol, token_decimals);
    println!();

    Ok(snapshot)
}

/// Transfers the funding amount to the test wallet, impersonating the
/// funding address. Fails fast if the funding address is underfunded.
async fn fund_wallet(client: &ChainClient, ledger: &AssetLedger<'_>) -> Result<()> {
    let funding_balance = ledger.balance_of(FUNDING_ADDRESS).await?;
    if funding_balance < FUNDING_AMOUNT {
        return Err(ContractError::InsufficientBalance {
            have: funding_balance,
            need: FUNDING_AMOUNT,
        }
        .into());
    }

    // The session always ends, even when the call inside it fails, so the
    // chain-side impersonation never outlives the step.
    let session = client.impersonate(FUNDING_ADDRESS).await?;
    let transferred = ledger
        .transfer_as(FUNDING_ADDRESS, client.signer_address(), FUNDING_AMOUNT)
        .await;
    let ended = session.end().await;
    transferred?;
    ended?;

    Ok(())
}

/// Quotes the mint from fresh supply/asset readings, approves the vault,
/// and calls `enter` as the vault owner. Returns the post-deposit share
/// balance.
async fn deposit(
    client: &ChainClient,
    ledger: &AssetLedger<'_>,
    vault: &VaultClient<'_>,
    snapshot: &VaultSnapshot,
) -> Result<U256> {
    let wallet = client.signer_address();
    println!("Depositing...");

    // Supply and assets read back-to-back so the quote ratio matches a
    // single chain view as closely as possible.
    let total_supply = vault.total_supply().await?;
    let vault_assets = ledger.balance_of(vault.address()).await?;
    let shares_to_mint = quote_mint(DEPOSIT_AMOUNT, total_supply, vault_assets)?;

    ledger.approve(vault.address(), DEPOSIT_AMOUNT).await?;

    let session = client.impersonate(snapshot.owner).await?;
    let entered = vault
        .enter_as(
            snapshot.owner,
            wallet,
            ledger.token(),
            DEPOSIT_AMOUNT,
            wallet,
            shares_to_mint,
        )
        .await;
    let ended = session.end().await;
    entered?;
    ended?;

    Ok(vault.share_balance_of(wallet).await?)
}

/// Burns the full share balance via `exit` as the vault owner. The supply
/// and asset readings are re-taken here: the deposit changed both, so the
/// quote from the deposit step is stale. Returns the final share balance.
async fn withdraw(
    client: &ChainClient,
    ledger: &AssetLedger<'_>,
    vault: &VaultClient<'_>,
    snapshot: &VaultSnapshot,
    shares_to_burn: U256,
) -> Result<U256> {
    let wallet = client.signer_address();
    println!("Withdrawing...");

    let vault_assets = ledger.balance_of(vault.address()).await?;
    let total_supply = vault.total_supply().await?;
    let assets_to_release = quote_burn(shares_to_burn, vault_assets, total_supply)?;

    let session = client.impersonate(snapshot.owner).await?;
    let exited = vault
        .exit_as(
            snapshot.owner,
            wallet,
            ledger.token(),
            assets_to_release,
            wallet,
            shares_to_burn,
        )
        .await;
    let ended = session.end().await;
    exited?;
    ended?;

    Ok(vault.share_balance_of(wallet).await?)
}
