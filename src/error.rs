//! Error types shared across the banking core.
//!
//! This module defines all domain errors and how they render as
//! human-readable messages.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Field-level problems, collected so every
//!   issue in a submission is reported in one pass
//! - **Repository Errors**: Unique-key violations and storage failures
//! - **Mapper Errors**: Malformed persisted records (missing keys,
//!   unknown discriminators)
//! - **Transfer-Protocol Errors**: Inactive accounts, invalid amounts,
//!   insufficient funds, per-type limits

use thiserror::Error;

/// Application-wide error type.
///
/// Services return `Result<T, BankError>`; the (out-of-core) controller
/// layer translates each variant into a user-facing message. Constructors
/// and mappers fail before any mutation is applied, so an `Err` never
/// leaves a half-updated entity or file behind.
#[derive(Debug, Error)]
pub enum BankError {
    /// One or more fields failed validation.
    ///
    /// Carries every collected message, not just the first one found.
    #[error("invalid fields: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// An entity with the same identity-field value already exists.
    #[error("an object with {field} = '{value}' already exists")]
    DuplicateKey { field: &'static str, value: String },

    /// A persisted record is missing required keys.
    ///
    /// Lists every absent key, indicating a hand-edited or corrupted file.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A persisted record carries an unrecognized type discriminator.
    #[error("unknown {family} type: {value}")]
    UnknownType { family: &'static str, value: String },

    /// A financial operation was attempted on an inactive account.
    #[error("account {0} is inactive and cannot perform operations")]
    InactiveAccount(String),

    /// The transfer amount is zero or negative.
    #[error("{0}")]
    InvalidAmount(String),

    /// The source account balance does not cover the transfer.
    #[error("insufficient funds for the transfer")]
    InsufficientFunds,

    /// The transfer amount exceeds the per-account-type ceiling.
    #[error("the transfer amount exceeds the limit of {0:.2}")]
    LimitExceeded(f64),

    /// A referenced entity could not be resolved.
    #[error("{0} not found")]
    NotFound(String),

    /// Password equality check failed.
    #[error("incorrect password")]
    IncorrectPassword,

    /// The postal code did not resolve to an address.
    #[error("postal code {0} could not be resolved")]
    InvalidPostalCode(String),

    /// The client already holds an account of the requested type.
    #[error("client already holds a {0} account")]
    DuplicateAccountType(String),

    /// The account targeted for reactivation is already active.
    #[error("account {0} is already active")]
    AlreadyActive(String),

    /// A backing file could not be written.
    ///
    /// Read failures never surface as this variant: a missing or
    /// malformed file reads as an empty collection.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type BankResult<T> = Result<T, BankError>;
