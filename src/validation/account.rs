//! Validation of account attributes.

use super::{FieldError, collect};
use crate::config::MIN_ACCOUNT_NUMBER_LEN;

/// Validate an account number.
///
/// Accepts a non-blank, digit-only string of at least
/// [`MIN_ACCOUNT_NUMBER_LEN`] digits.
pub fn account_number(number: &str) -> Result<(), FieldError> {
    let trimmed = number.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("Account number cannot be blank."));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new("Account number must contain only digits."));
    }
    if trimmed.len() < MIN_ACCOUNT_NUMBER_LEN {
        return Err(FieldError::new("Account number is too short."));
    }
    Ok(())
}

/// Require a finite real number (rejects NaN and infinities).
fn finite(balance: f64) -> Result<(), FieldError> {
    if !balance.is_finite() {
        return Err(FieldError::new("Balance cannot be NaN or infinite."));
    }
    Ok(())
}

/// Validate a balance where negative values are acceptable, as in the
/// monthly maintenance-fee debit.
pub fn balance_free(balance: f64) -> Result<(), FieldError> {
    finite(balance)
}

/// Validate a balance for operations that never allow a negative result,
/// such as transfers.
pub fn balance_non_negative(balance: f64) -> Result<(), FieldError> {
    finite(balance)?;
    if balance < 0.0 {
        return Err(FieldError::new("Balance cannot be negative."));
    }
    Ok(())
}

/// Validate every common account field, collecting all errors.
///
/// The history (strings only) and active flag (boolean) constraints are
/// enforced structurally by the Rust types and at the mapper boundary
/// for persisted records.
pub fn account_fields(number: &str, balance: f64) -> Vec<String> {
    let mut errors = Vec::new();
    collect(&mut errors, account_number(number));
    collect(&mut errors, balance_free(balance));
    errors
}
