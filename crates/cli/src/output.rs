//! Report formatting helpers.
//!
//! Share and asset quantities stay in base units everywhere else; these
//! helpers produce the human-readable strings at the very end of the
//! pipeline, using integer/string math so no precision is lost on the way.

use alloy_primitives::U256;

/// Splits a base-unit value into integer and fractional decimal strings.
fn split_units(value: U256, decimals: u8) -> (String, String) {
    let digits = value.to_string();
    let d = decimals as usize;
    if digits.len() > d {
        let (int_part, frac_part) = digits.split_at(digits.len() - d);
        (int_part.to_string(), frac_part.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = d))
    }
}

/// Full-precision decimal rendering of a token amount, trailing zeros
/// trimmed. `1_000_000` at 8 decimals renders as `0.01`.
pub fn format_units(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let (int_part, frac_part) = split_units(value, decimals);
    let trimmed = frac_part.trim_end_matches('0');
    if trimmed.is_empty() {
        format!("{}.0", int_part)
    } else {
        format!("{}.{}", int_part, trimmed)
    }
}

/// Six-decimal-place display of a balance. The tail beyond the sixth
/// place rounds half-up, carrying into the integer part when it must.
pub fn format_fixed6(value: U256, decimals: u8) -> String {
    let scaled = if decimals > 6 {
        let divisor = U256::from(10u64).pow(U256::from(decimals - 6));
        let (quotient, remainder) = (value / divisor, value % divisor);
        if remainder + remainder >= divisor {
            quotient + U256::from(1u64)
        } else {
            quotient
        }
    } else {
        value * U256::from(10u64).pow(U256::from(6 - decimals))
    };
    let million = U256::from(1_000_000u64);
    let frac_part = (scaled % million).to_string();
    format!("{}.{:0>6}", scaled / million, frac_part)
}
