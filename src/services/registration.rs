//! Client registration.
//!
//! Creates the person and the client together, enforcing document and
//! email uniqueness before any entity is constructed or persisted.

use crate::address::AddressResolver;
use crate::error::{BankError, BankResult};
use crate::models::{Client, Person, PersonFields};
use crate::repository::Repositories;

/// Registration input for a new client.
#[derive(Debug, Clone)]
pub enum NewClient {
    /// Natural person, `birth_date` in `dd/mm/yyyy` form.
    Natural {
        fields: PersonFields,
        birth_date: String,
        password: String,
    },
    /// Legal person with an optional (possibly blank) trade name.
    Legal {
        fields: PersonFields,
        trade_name: String,
        password: String,
    },
}

impl NewClient {
    fn fields(&self) -> &PersonFields {
        match self {
            NewClient::Natural { fields, .. } | NewClient::Legal { fields, .. } => fields,
        }
    }
}

/// Register a new client.
///
/// # Process
///
/// 1. Reject a duplicate document number
/// 2. Reject a duplicate email
/// 3. Construct the person (validates every field and resolves the
///    address through `resolver`)
/// 4. Persist the person, then the client referencing it
///
/// The initial password is stored as given; the strength rule applies
/// only on password change.
pub fn register_client(
    repos: &mut Repositories,
    resolver: &dyn AddressResolver,
    new_client: NewClient,
) -> BankResult<()> {
    let Repositories {
        persons,
        accounts,
        clients,
    } = repos;

    let document = new_client.fields().document_number.clone();
    tracing::info!(document = %document, "registering client");

    if clients.find_by_id(&document, persons, accounts)?.is_some() {
        return Err(BankError::DuplicateKey {
            field: "documentNumber",
            value: document,
        });
    }
    if persons.email_exists(&new_client.fields().email) {
        return Err(BankError::DuplicateKey {
            field: "email",
            value: new_client.fields().email.clone(),
        });
    }

    let (person, password) = match new_client {
        NewClient::Natural {
            fields,
            birth_date,
            password,
        } => (Person::natural(fields, &birth_date, resolver)?, password),
        NewClient::Legal {
            fields,
            trade_name,
            password,
        } => (Person::legal(fields, &trade_name, resolver)?, password),
    };

    persons.save(&person)?;
    clients.save(&Client::new(person, password, Vec::new()))?;

    tracing::info!(document = %document, "client registered");
    Ok(())
}
