/// Validation for user-entered form values.
///
/// Every check here runs before any network call; a rejected input never
/// leaves the process.
use crate::core::error::AppError;
use shared::units::{parse_units, UnitsError, PERCENT_DECIMALS, TOKEN_DECIMALS};

/// Highest base APR the contract accepts: 100.00% in basis points.
pub const MAX_APR_BPS: u32 = 10_000;

/// Parse a token amount and check it against the displayed available balance.
pub fn validate_amount(input: &str, available: u128) -> Result<u128, AppError> {
    let amount = parse_units(input, TOKEN_DECIMALS).map_err(|e| match e {
        UnitsError::Empty => AppError::Validation("Enter an amount".to_string()),
        UnitsError::TooManyDecimals => {
            AppError::Validation(format!("At most {TOKEN_DECIMALS} decimal places"))
        }
        UnitsError::InvalidDigit | UnitsError::Overflow => {
            AppError::Validation("Amount must be a positive number".to_string())
        }
    })?;

    if amount == 0 {
        return Err(AppError::Validation("Amount must be greater than 0".to_string()));
    }
    if amount > available {
        return Err(AppError::Validation("Amount exceeds available balance".to_string()));
    }
    Ok(amount)
}

/// Parse a percentage with up to two decimals into basis points, bounded to
/// the contract's 0–100% range.
pub fn validate_apr_percent(input: &str) -> Result<u32, AppError> {
    let bps = parse_units(input, PERCENT_DECIMALS).map_err(|e| match e {
        UnitsError::Empty => AppError::Validation("Enter an APR".to_string()),
        UnitsError::TooManyDecimals => {
            AppError::Validation("APR supports at most two decimal places".to_string())
        }
        UnitsError::InvalidDigit | UnitsError::Overflow => {
            AppError::Validation("APR must be a number".to_string())
        }
    })?;

    if bps > u128::from(MAX_APR_BPS) {
        return Err(AppError::Validation("APR must be between 0 and 100".to_string()));
    }
    Ok(bps as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u128 = 10u128.pow(18);

    #[test]
    fn accepts_amounts_within_balance() {
        assert_eq!(validate_amount("1", 2 * ONE).unwrap(), ONE);
        assert_eq!(validate_amount("0.5", ONE).unwrap(), ONE / 2);
        // Exactly the displayed balance is allowed.
        assert_eq!(validate_amount("2", 2 * ONE).unwrap(), 2 * ONE);
    }

    #[test]
    fn rejects_empty_zero_negative_and_garbage() {
        assert!(validate_amount("", ONE).is_err());
        assert!(validate_amount("   ", ONE).is_err());
        assert!(validate_amount("0", ONE).is_err());
        assert!(validate_amount("0.0", ONE).is_err());
        assert!(validate_amount("-1", ONE).is_err());
        assert!(validate_amount("abc", ONE).is_err());
        assert!(validate_amount("1e3", ONE).is_err());
    }

    #[test]
    fn rejects_amounts_over_balance() {
        assert!(validate_amount("2.000000000000000001", 2 * ONE).is_err());
        assert!(validate_amount("100", ONE).is_err());
    }

    #[test]
    fn apr_converts_percent_to_basis_points() {
        assert_eq!(validate_apr_percent("8").unwrap(), 800);
        assert_eq!(validate_apr_percent("12.34").unwrap(), 1234);
        assert_eq!(validate_apr_percent("0").unwrap(), 0);
        assert_eq!(validate_apr_percent("100").unwrap(), MAX_APR_BPS);
    }

    #[test]
    fn apr_range_and_format_are_enforced() {
        assert!(validate_apr_percent("100.01").is_err());
        assert!(validate_apr_percent("101").is_err());
        assert!(validate_apr_percent("8.125").is_err());
        assert!(validate_apr_percent("").is_err());
        assert!(validate_apr_percent("-5").is_err());
    }
}
