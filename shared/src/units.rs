//! # Amount and Address Formatting
//!
//! Fixed-point conversions between user-facing decimal strings and integer
//! base units, plus address truncation for display.

use std::fmt;

/// Decimal places of the staking token's base units.
pub const TOKEN_DECIMALS: u32 = 18;

/// Decimal places used for percentage inputs (1% == 100 basis points).
pub const PERCENT_DECIMALS: u32 = 2;

/// Errors produced when parsing a decimal amount string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsError {
    /// Input was empty or whitespace only.
    Empty,
    /// Input contained a character that is not a digit or a single dot.
    InvalidDigit,
    /// More fractional digits than the unit supports.
    TooManyDecimals,
    /// Value does not fit in a `u128`.
    Overflow,
}

impl fmt::Display for UnitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitsError::Empty => write!(f, "amount is empty"),
            UnitsError::InvalidDigit => write!(f, "amount contains invalid characters"),
            UnitsError::TooManyDecimals => write!(f, "amount has too many decimal places"),
            UnitsError::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for UnitsError {}

/// Parse a decimal string (e.g. `"1.5"`) into integer base units.
///
/// Accepts plain unsigned decimal notation only; signs, exponents and
/// separators are rejected. At most `decimals` fractional digits are allowed.
pub fn parse_units(input: &str, decimals: u32) -> Result<u128, UnitsError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (int_part, frac_part) = match input.split_once('.') {
        Some((i, f)) => (i, f),
        None => (input, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(UnitsError::Empty);
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(UnitsError::InvalidDigit);
    }
    if frac_part.len() as u32 > decimals {
        return Err(UnitsError::TooManyDecimals);
    }

    let scale = 10u128.pow(decimals);
    let int_value = if int_part.is_empty() {
        0
    } else {
        int_part.parse::<u128>().map_err(|_| UnitsError::Overflow)?
    };
    let mut value = int_value.checked_mul(scale).ok_or(UnitsError::Overflow)?;

    if !frac_part.is_empty() {
        let frac_value = frac_part.parse::<u128>().map_err(|_| UnitsError::Overflow)?;
        let pad = 10u128.pow(decimals - frac_part.len() as u32);
        let frac_units = frac_value.checked_mul(pad).ok_or(UnitsError::Overflow)?;
        value = value.checked_add(frac_units).ok_or(UnitsError::Overflow)?;
    }

    Ok(value)
}

/// Format integer base units as a decimal string, trimming trailing zeros.
pub fn format_units(value: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let int_part = value / scale;
    let frac_part = value % scale;

    if frac_part == 0 {
        return int_part.to_string();
    }

    let mut frac_str = format!("{:0width$}", frac_part, width = decimals as usize);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{}.{}", int_part, frac_str)
}

/// Shorten an address for display, keeping the first `prefix_len` and last
/// `suffix_len` characters. Addresses too short to shorten are returned as-is.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = address.len();
    if len <= prefix_len + suffix_len || prefix_len >= len || suffix_len >= len {
        return address.to_string();
    }
    // Hex addresses are ASCII, so byte slicing is safe here.
    format!("{}...{}", &address[..prefix_len], &address[len - suffix_len..])
}

/// Shorten an address with the default `0x1234...abcd` shape.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_and_fractional_amounts() {
        assert_eq!(parse_units("1", 18), Ok(10u128.pow(18)));
        assert_eq!(parse_units("1.5", 18), Ok(15 * 10u128.pow(17)));
        assert_eq!(parse_units("0.000000000000000001", 18), Ok(1));
        assert_eq!(parse_units(".5", 18), Ok(5 * 10u128.pow(17)));
        assert_eq!(parse_units("2.", 18), Ok(2 * 10u128.pow(18)));
        assert_eq!(parse_units(" 7 ", 2), Ok(700));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(parse_units("", 18), Err(UnitsError::Empty));
        assert_eq!(parse_units("   ", 18), Err(UnitsError::Empty));
        assert_eq!(parse_units(".", 18), Err(UnitsError::Empty));
        assert_eq!(parse_units("-1", 18), Err(UnitsError::InvalidDigit));
        assert_eq!(parse_units("1e5", 18), Err(UnitsError::InvalidDigit));
        assert_eq!(parse_units("1,000", 18), Err(UnitsError::InvalidDigit));
        assert_eq!(parse_units("1..2", 18), Err(UnitsError::InvalidDigit));
        assert_eq!(parse_units("0.123", 2), Err(UnitsError::TooManyDecimals));
    }

    #[test]
    fn parse_rejects_overflow() {
        // 39 nines exceed u128::MAX on their own, let alone scaled by 10^18.
        let big = "9".repeat(39);
        assert_eq!(parse_units(&big, 18), Err(UnitsError::Overflow));
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_units(10u128.pow(18), 18), "1");
        assert_eq!(format_units(15 * 10u128.pow(17), 18), "1.5");
        assert_eq!(format_units(1, 18), "0.000000000000000001");
        assert_eq!(format_units(0, 18), "0");
        assert_eq!(format_units(1234, 2), "12.34");
    }

    #[test]
    fn parse_format_round_trip() {
        for input in ["0.25", "1000", "42.000000000000000001"] {
            let units = parse_units(input, 18).expect("valid amount");
            assert_eq!(parse_units(&format_units(units, 18), 18), Ok(units));
        }
    }

    #[test]
    fn truncates_long_addresses() {
        let addr = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        assert_eq!(truncate_address(addr), "0xf39F...2266");
        assert_eq!(format_address(addr, 4, 4), "0xf3...2266");
        assert_eq!(format_address("0xabc", 6, 4), "0xabc");
    }
}
