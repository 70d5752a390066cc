//! Field validators.
//!
//! Each single-field check is a pure function returning
//! `Result<(), FieldError>`. The per-entity aggregates collect every
//! error into a `Vec<String>` without short-circuiting, so a caller can
//! report all problems of a submission in one pass.

pub mod account;
pub mod client;
pub mod person;

use thiserror::Error;

/// A single invalid-field failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FieldError(String);

impl FieldError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The message carried by this failure.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Remove every non-digit character from the input.
pub(crate) fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Push the message of a failed check onto the error list.
pub(crate) fn collect(errors: &mut Vec<String>, result: Result<(), FieldError>) {
    if let Err(err) = result {
        errors.push(err.message().to_string());
    }
}
