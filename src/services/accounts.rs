//! Account lifecycle services: creation, statement, closure,
//! reactivation, and recipient lookup.

use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountKind, Client};
use crate::repository::Repositories;

/// Open a new account of the given kind for a client.
///
/// Allocates the next free account number, persists the account with a
/// zero balance, and appends it to the client's account list. Fails if
/// the client already holds an account of the requested kind.
///
/// Returns the new account number.
pub fn open_account(
    repos: &mut Repositories,
    document: &str,
    kind: AccountKind,
) -> BankResult<String> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    let client = clients
        .find_by_id(document, persons, accounts)?
        .ok_or_else(|| BankError::NotFound(format!("client {document}")))?;

    if client.has_account_of(kind) {
        return Err(BankError::DuplicateAccountType(kind.type_tag().to_string()));
    }

    let number = accounts.next_account_number()?;
    let account = Account::new(kind, number.clone())?;
    accounts.save(&account)?;

    // Re-resolve the client so the membership update starts from the
    // freshly persisted state.
    let mut client = clients
        .find_by_id(document, persons, accounts)?
        .ok_or_else(|| BankError::NotFound(format!("client {document}")))?;
    client.accounts_mut().push(account);
    clients.update(&client)?;

    tracing::info!(document = %document, number = %number, kind = kind.type_tag(), "account opened");
    Ok(number)
}

/// Balance and account data for a statement view. Inactive accounts are
/// rejected.
pub fn statement(repos: &mut Repositories, number: &str) -> BankResult<(f64, Account)> {
    let account = repos
        .accounts
        .find_by_id(number)?
        .ok_or_else(|| BankError::NotFound(format!("account {number}")))?;
    if !account.is_active() {
        return Err(BankError::InactiveAccount(account.number().to_string()));
    }
    Ok((account.balance(), account))
}

/// All accounts owned by a client, in creation order.
pub fn list_accounts(repos: &mut Repositories, document: &str) -> BankResult<Vec<Account>> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    Ok(clients
        .find_by_id(document, persons, accounts)?
        .map(|client| client.accounts().to_vec())
        .unwrap_or_default())
}

/// Resolve the owning client of an account plus the account itself,
/// after checking the owner's password.
fn owned_account(
    repos: &mut Repositories,
    document: &str,
    number: &str,
    password: &str,
) -> BankResult<(Client, Account)> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    let client = clients
        .find_by_id(document, persons, accounts)?
        .ok_or_else(|| BankError::NotFound(format!("client {document}")))?;
    if !client.verify_password(password) {
        return Err(BankError::IncorrectPassword);
    }

    let account = client
        .account(number)
        .cloned()
        .ok_or_else(|| BankError::NotFound(format!("account {number}")))?;
    Ok((client, account))
}

/// Close an active account owned by the client.
pub fn close_account(
    repos: &mut Repositories,
    document: &str,
    number: &str,
    password: &str,
) -> BankResult<()> {
    let (client, mut account) = owned_account(repos, document, number, password)?;
    if !account.is_active() {
        return Err(BankError::InactiveAccount(account.number().to_string()));
    }

    account.close();
    repos.accounts.update(&account)?;
    repos.clients.update(&client)?;

    tracing::info!(number = %number, "account closed");
    Ok(())
}

/// Reactivate a previously closed account owned by the client.
pub fn reactivate_account(
    repos: &mut Repositories,
    document: &str,
    number: &str,
    password: &str,
) -> BankResult<()> {
    let (client, mut account) = owned_account(repos, document, number, password)?;
    if account.is_active() {
        return Err(BankError::AlreadyActive(account.number().to_string()));
    }

    account.reactivate();
    repos.accounts.update(&account)?;
    repos.clients.update(&client)?;

    tracing::info!(number = %number, "account reactivated");
    Ok(())
}

/// Human-readable description of the holder of a destination account.
pub fn recipient_info(repos: &mut Repositories, number: &str) -> BankResult<String> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    match clients.find_by_account_number(number, persons, accounts)? {
        Some(client) => Ok(format!(
            "Recipient: {} | Document: {} | Account: {}",
            client.person().name(),
            client.document_number(),
            number
        )),
        None => Ok(format!("Account {number} (client not found)")),
    }
}
