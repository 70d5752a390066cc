//! Validation of client credentials.

use super::FieldError;
use regex::Regex;
use std::sync::LazyLock;

static UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]").unwrap());

/// Validate password strength, applied on password change.
///
/// Requires at least 8 characters with one uppercase letter, one
/// lowercase letter, one digit, and one special character.
pub fn password(password: &str) -> Result<(), FieldError> {
    if password.len() < 8
        || !UPPER_RE.is_match(password)
        || !LOWER_RE.is_match(password)
        || !DIGIT_RE.is_match(password)
        || !SYMBOL_RE.is_match(password)
    {
        return Err(FieldError::new(
            "Password must have at least 8 characters, including an uppercase letter, a lowercase letter, a digit, and a special character.",
        ));
    }
    Ok(())
}
