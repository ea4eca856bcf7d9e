//! Proportional mint/burn quotes.
//!
//! Both quotes use floor division (integer truncation), matching the
//! vault's own rounding so a deposit-then-burn round trip can never
//! create value.

use alloy_primitives::U256;

use crate::error::AccountingError;

/// Exact `floor(a * b / d)` without intermediate rounding.
///
/// The divisor must be non-zero; callers guard that before dispatching.
fn mul_div_down(a: U256, b: U256, d: U256) -> Result<U256, AccountingError> {
    let product = a.checked_mul(b).ok_or(AccountingError::Overflow)?;
    Ok(product / d)
}

/// Quote the shares a vault is expected to mint for a deposit.
///
/// With no outstanding shares the first deposit mints 1:1 by convention.
/// Otherwise the quote is `floor(deposit * total_supply / total_assets)`
/// against the supplied point-in-time readings.
///
/// Returns [`AccountingError::ZeroTotalAssets`] if shares are outstanding
/// but the vault's asset balance reads as zero; that ratio is undefined
/// and quoting against it would silently divide by zero.
pub fn quote_mint(
    deposit: U256,
    total_supply: U256,
    total_assets: U256,
) -> Result<U256, AccountingError> {
    if total_supply.is_zero() {
        return Ok(deposit);
    }
    if total_assets.is_zero() {
        return Err(AccountingError::ZeroTotalAssets { total_supply });
    }
    mul_div_down(deposit, total_supply, total_assets)
}

/// Quote the assets a vault is expected to release for burning shares.
///
/// The quote is `floor(shares * total_assets / total_supply)`. Readings
/// must be taken after any deposit whose shares are being burned; the
/// pre-deposit ratio is stale the moment the deposit confirms.
pub fn quote_burn(
    shares: U256,
    total_assets: U256,
    total_supply: U256,
) -> Result<U256, AccountingError> {
    if total_supply.is_zero() {
        return Err(AccountingError::ZeroTotalSupply);
    }
    mul_div_down(shares, total_assets, total_supply)
}
