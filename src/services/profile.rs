//! Profile reads and client-level updates.

use crate::error::{BankError, BankResult};
use crate::models::{Account, Client, PersonKind};
use crate::repository::Repositories;
use crate::validation::person::BIRTH_DATE_FORMAT;

/// Public and financial data of a client, shaped for display.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    /// Document formatted with its kind, e.g. `CPF: 12345678900`.
    pub document: String,
    pub email: String,
    pub postal_code: String,
    pub address_number: String,
    pub address: String,
    pub phone: String,
    /// Present only for natural persons, formatted `dd/mm/yyyy`.
    pub birth_date: Option<String>,
    pub accounts: Vec<Account>,
}

/// Assemble the profile of the client with the given document number.
pub fn profile(repos: &mut Repositories, document: &str) -> BankResult<Profile> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    let client = clients
        .find_by_id(document, persons, accounts)?
        .ok_or_else(|| BankError::NotFound(format!("client {document}")))?;
    let person = client.person();

    let document_label = match person.kind() {
        PersonKind::Natural { .. } => "CPF",
        PersonKind::Legal { .. } => "CNPJ",
    };

    Ok(Profile {
        name: person.name().to_string(),
        document: format!("{document_label}: {}", person.document_number()),
        email: person.email().to_string(),
        postal_code: person.postal_code().to_string(),
        address_number: person.address_number().to_string(),
        address: person.address().to_string(),
        phone: person.phone().to_string(),
        birth_date: person
            .birth_date()
            .map(|date| date.format(BIRTH_DATE_FORMAT).to_string()),
        accounts: client.accounts().to_vec(),
    })
}

/// The client owning the given account, if any.
pub fn client_by_account(repos: &mut Repositories, number: &str) -> BankResult<Option<Client>> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;
    clients.find_by_account_number(number, persons, accounts)
}

/// Persist changes made to a client and its person.
pub fn update_client(repos: &mut Repositories, client: &Client) -> BankResult<()> {
    repos.clients.update(client)?;
    repos.persons.update(client.person())?;
    Ok(())
}

/// Change a client's password, verifying the current one and enforcing
/// the strength rule on the new one.
pub fn change_password(
    repos: &mut Repositories,
    document: &str,
    current: &str,
    new_password: &str,
) -> BankResult<()> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    let mut client = clients
        .find_by_id(document, persons, accounts)?
        .ok_or_else(|| BankError::NotFound(format!("client {document}")))?;
    client.change_password(current, new_password)?;
    clients.update(&client)?;

    tracing::info!(document = %document, "password changed");
    Ok(())
}
