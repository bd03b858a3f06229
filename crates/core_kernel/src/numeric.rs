//! Amount normalization for user-entered price and VAT fields
//!
//! Forms accept either `.` or `,` as the decimal separator and treat an
//! empty field as zero. Negative amounts never reach persistence.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by amount parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("'{0}' is not a number")]
    Unparseable(String),

    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),
}

/// Parses a user-entered amount into a non-negative decimal.
///
/// Empty input normalizes to zero; a comma decimal separator is accepted.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let normalized = trimmed.replace(',', ".");
    let amount: Decimal = normalized
        .parse()
        .map_err(|_| AmountError::Unparseable(trimmed.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative(amount));
    }

    Ok(amount)
}
