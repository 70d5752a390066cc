//! Client repository.
//!
//! A client record stores only the document number, the password, and
//! the list of owned account numbers:
//! `{documentNumber, password, accounts: [string...]}`. The full
//! [`Client`] is reconstructed at read time by resolving the person and
//! each account through the corresponding repositories, which the
//! caller passes in so all lookups share one set of caches. An account
//! number that no longer resolves is silently dropped.
//!
//! Only raw records are cached here; persons and accounts are
//! re-resolved on every read, so a client read always reflects the
//! latest person and account writes.

use super::{AccountRepository, PersonRepository, record_id};
use crate::config::CLIENTS_FILE;
use crate::error::{BankError, BankResult};
use crate::mappers::{require_keys, string_field};
use crate::models::Client;
use crate::storage::JsonStore;
use serde_json::{Map, Value};
use std::path::Path;

const ID_FIELD: &str = "documentNumber";

/// Persistence of clients, keyed by the person's document number.
pub struct ClientRepository {
    store: JsonStore,
    cache: Option<Vec<Map<String, Value>>>,
}

impl ClientRepository {
    /// Open the client repository under `dir`.
    pub fn open(dir: &Path) -> Self {
        Self {
            store: JsonStore::new(dir, CLIENTS_FILE),
            cache: None,
        }
    }

    fn to_record(client: &Client) -> Map<String, Value> {
        let numbers: Vec<Value> = client
            .accounts()
            .iter()
            .map(|account| Value::from(account.number()))
            .collect();

        let mut record = Map::new();
        record.insert(ID_FIELD.into(), Value::from(client.document_number()));
        record.insert("password".into(), Value::from(client.password()));
        record.insert("accounts".into(), Value::from(numbers));
        record
    }

    fn from_record(
        record: &Map<String, Value>,
        persons: &mut PersonRepository,
        accounts: &mut AccountRepository,
    ) -> BankResult<Client> {
        require_keys(record, &[ID_FIELD, "password"])?;
        let document = string_field(record, ID_FIELD)?;
        let password = string_field(record, "password")?;

        let person = persons
            .find_by_id(&document)?
            .ok_or_else(|| BankError::NotFound(format!("person {document}")))?;

        let mut owned = Vec::new();
        if let Some(numbers) = record.get("accounts").and_then(Value::as_array) {
            for number in numbers {
                let number = match number {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => continue,
                };
                // Dangling account references are ignored, not errors.
                if let Some(account) = accounts.find_by_id(&number)? {
                    owned.push(account);
                }
            }
        }

        Ok(Client::new(person, password, owned))
    }

    /// Every client, fully reconstructed. Records are served from the
    /// cache when warm; persons and accounts are resolved fresh on
    /// every call.
    pub fn list_all(
        &mut self,
        persons: &mut PersonRepository,
        accounts: &mut AccountRepository,
    ) -> BankResult<Vec<Client>> {
        let records = match self.cache.clone() {
            Some(records) => records,
            None => {
                let records = self.store.read_records();
                self.cache = Some(records.clone());
                records
            }
        };

        let mut clients = Vec::new();
        for record in &records {
            clients.push(Self::from_record(record, persons, accounts)?);
        }
        Ok(clients)
    }

    /// The client with the given document number, if any.
    pub fn find_by_id(
        &mut self,
        document: &str,
        persons: &mut PersonRepository,
        accounts: &mut AccountRepository,
    ) -> BankResult<Option<Client>> {
        let document = document.trim();
        Ok(self
            .list_all(persons, accounts)?
            .into_iter()
            .find(|client| client.document_number() == document))
    }

    /// The client owning the given account number, scanning every
    /// client's resolved account list in listing order.
    pub fn find_by_account_number(
        &mut self,
        number: &str,
        persons: &mut PersonRepository,
        accounts: &mut AccountRepository,
    ) -> BankResult<Option<Client>> {
        let number = number.trim();
        Ok(self
            .list_all(persons, accounts)?
            .into_iter()
            .find(|client| client.accounts().iter().any(|a| a.number() == number)))
    }

    /// Insert a new client, enforcing document-number uniqueness.
    pub fn save(&mut self, client: &Client) -> BankResult<()> {
        let mut records = self.store.read_records();
        let id = client.document_number();

        let duplicate = records
            .iter()
            .any(|existing| record_id(existing, ID_FIELD).as_deref() == Some(id.trim()));
        if duplicate {
            return Err(BankError::DuplicateKey {
                field: ID_FIELD,
                value: id.to_string(),
            });
        }

        records.push(Self::to_record(client));
        self.store.write_records(&records)?;
        self.cache = None;
        Ok(())
    }

    /// Replace the stored record for this client. Returns whether a
    /// matching document number was found.
    pub fn update(&mut self, client: &Client) -> BankResult<bool> {
        let mut records = self.store.read_records();
        let id = client.document_number().trim();

        let position = records
            .iter()
            .position(|existing| record_id(existing, ID_FIELD).as_deref() == Some(id));
        match position {
            Some(index) => {
                records[index] = Self::to_record(client);
                self.store.write_records(&records)?;
                self.cache = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the client with the given document number.
    pub fn delete(&mut self, document: &str) -> BankResult<bool> {
        let records = self.store.read_records();
        let document = document.trim();

        let before = records.len();
        let remaining: Vec<_> = records
            .into_iter()
            .filter(|existing| record_id(existing, ID_FIELD).as_deref() != Some(document))
            .collect();
        if remaining.len() == before {
            return Ok(false);
        }

        self.store.write_records(&remaining)?;
        self.cache = None;
        Ok(true)
    }
}
