//! Transfer orchestration between two accounts.
//!
//! Validates the request fields, authenticates the source owner,
//! resolves both sides, and then delegates the monetary checks to
//! [`Account::transfer`], which enforces the protocol order (inactive
//! source, inactive destination, non-positive amount, insufficient
//! funds, limit exceeded) with no partial application.

use crate::error::{BankError, BankResult};
use crate::models::Account;
use crate::repository::Repositories;
use crate::validation;

/// A transfer submission as captured from the caller.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Number of the source account.
    pub source_account: String,
    /// Document number identifying the destination client.
    pub destination_document: String,
    /// Number of the destination account, owned by that client.
    pub destination_account: String,
    pub amount: f64,
    /// Password of the source account's owner.
    pub password: String,
}

impl TransferRequest {
    /// Field-presence and format checks, collected without
    /// short-circuiting so the caller can report every problem at once.
    fn field_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(err) = validation::account::account_number(&self.source_account) {
            errors.push(format!("Source account: {}", err.message()));
        }
        if let Err(err) = validation::account::account_number(&self.destination_account) {
            errors.push(format!("Destination account: {}", err.message()));
        }
        if self.destination_document.trim().is_empty() {
            errors.push("Destination document is required.".to_string());
        }
        if self.password.is_empty() {
            errors.push("Password is required.".to_string());
        }
        errors
    }
}

/// Process a transfer between two accounts.
///
/// Returns a confirmation message naming the recipient, or the first
/// failure: collected field errors as [`BankError::Validation`],
/// authentication and resolution failures, or the transfer-protocol
/// errors raised by [`Account::transfer`]. Both accounts are persisted
/// only after the entity-level transfer succeeded.
pub fn process_transfer(repos: &mut Repositories, request: TransferRequest) -> BankResult<String> {
    let errors = request.field_errors();
    if !errors.is_empty() {
        return Err(BankError::Validation(errors));
    }

    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    let source_owner = clients
        .find_by_account_number(&request.source_account, persons, accounts)?
        .ok_or_else(|| {
            BankError::NotFound(format!(
                "client owning account {}",
                request.source_account
            ))
        })?;
    if !source_owner.verify_password(&request.password) {
        tracing::warn!(account = %request.source_account, "transfer rejected: wrong password");
        return Err(BankError::IncorrectPassword);
    }

    let mut source: Account = accounts
        .find_by_id(&request.source_account)?
        .ok_or_else(|| BankError::NotFound(format!("account {}", request.source_account)))?;

    let destination_client = clients
        .find_by_id(&request.destination_document, persons, accounts)?
        .ok_or_else(|| {
            BankError::NotFound(format!(
                "recipient with document {}",
                request.destination_document
            ))
        })?;
    let mut destination: Account = destination_client
        .account(&request.destination_account)
        .cloned()
        .ok_or_else(|| {
            BankError::NotFound(format!("account {}", request.destination_account))
        })?;

    if source.number() == destination.number() {
        return Err(BankError::Validation(vec![
            "Cannot transfer to the same account.".to_string(),
        ]));
    }

    source.transfer(&mut destination, request.amount)?;

    accounts.update(&source)?;
    accounts.update(&destination)?;

    tracing::info!(
        source = %source.number(),
        destination = %destination.number(),
        amount = request.amount,
        "transfer completed"
    );
    Ok(format!(
        "Transfer of {:.2} completed to {} (account {}).",
        request.amount,
        destination_client.person().name(),
        destination.number()
    ))
}
