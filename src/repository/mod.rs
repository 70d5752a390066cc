//! Repository (DAO) layer.
//!
//! A generic contract over one JSON document list per entity family:
//! list-all, find-by-id, insert-unique, update, delete. Every write
//! re-reads the full current file, mutates the list in memory, and
//! rewrites the whole file. Each repository holds a process-lifetime
//! read cache populated lazily on the first `list_all` and cleared on
//! every successful write, so a read after a write always reflects the
//! write. Identity comparisons are string-normalized: numeric and
//! string representations of the same id match.
//!
//! Not safe for concurrent writers — single-process assumption, last
//! full-file write wins.

pub mod account;
pub mod client;
pub mod person;

pub use account::AccountRepository;
pub use client::ClientRepository;
pub use person::PersonRepository;

use crate::config::Config;
use crate::error::{BankError, BankResult};
use crate::mappers::RecordMapper;
use crate::storage::JsonStore;
use serde_json::{Map, Value};

/// The three repositories of the system, rooted at one data directory.
///
/// Owned as plain state (no globals) so tests can spin up independent
/// instances against isolated directories.
pub struct Repositories {
    pub persons: PersonRepository,
    pub accounts: AccountRepository,
    pub clients: ClientRepository,
}

impl Repositories {
    /// Open the repositories under the configured data directory. Files
    /// are created lazily on first write.
    pub fn open(config: &Config) -> Self {
        Self {
            persons: PersonRepository::open(&config.data_dir),
            accounts: AccountRepository::open(&config.data_dir),
            clients: ClientRepository::open(&config.data_dir),
        }
    }
}

/// Render the identity field of a raw record as a normalized string.
pub(crate) fn record_id(record: &Map<String, Value>, field: &str) -> Option<String> {
    match record.get(field) {
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Generic JSON-backed repository, parameterized by the mapper that
/// supplies the identity field and the record conversions.
pub struct JsonRepository<M: RecordMapper> {
    store: JsonStore,
    mapper: M,
    cache: Option<Vec<M::Entity>>,
}

impl<M: RecordMapper> JsonRepository<M>
where
    M::Entity: Clone,
{
    pub fn new(store: JsonStore, mapper: M) -> Self {
        Self {
            store,
            mapper,
            cache: None,
        }
    }

    /// Raw records currently in the backing file, bypassing the entity
    /// cache. Used by lookups that predate entity construction.
    pub(crate) fn records(&self) -> Vec<Map<String, Value>> {
        self.store.read_records()
    }

    /// Every entity in the backing file, served from the cache when
    /// warm.
    pub fn list_all(&mut self) -> BankResult<Vec<M::Entity>> {
        if let Some(cached) = &self.cache {
            return Ok(cached.clone());
        }

        let mut entities = Vec::new();
        for record in self.store.read_records() {
            entities.push(self.mapper.from_record(&record)?);
        }
        self.cache = Some(entities.clone());
        Ok(entities)
    }

    /// The entity whose identity field matches `id`, if any.
    pub fn find_by_id(&mut self, id: &str) -> BankResult<Option<M::Entity>> {
        let id = id.trim();
        let entities = self.list_all()?;
        Ok(entities
            .into_iter()
            .find(|entity| self.mapper.id_of(entity) == id))
    }

    /// Insert a new entity, enforcing identity uniqueness.
    ///
    /// On [`BankError::DuplicateKey`] the backing file is untouched.
    pub fn save(&mut self, entity: &M::Entity) -> BankResult<()> {
        let mut records = self.store.read_records();
        let id = self.mapper.id_of(entity);
        let field = self.mapper.id_field();

        let duplicate = records
            .iter()
            .any(|existing| record_id(existing, field).as_deref() == Some(id.trim()));
        if duplicate {
            return Err(BankError::DuplicateKey { field, value: id });
        }

        records.push(self.mapper.to_record(entity));
        self.store.write_records(&records)?;
        self.cache = None;
        Ok(())
    }

    /// Replace the stored record with the same identity. Returns whether
    /// a matching record was found and rewritten.
    pub fn update(&mut self, entity: &M::Entity) -> BankResult<bool> {
        let mut records = self.store.read_records();
        let id = self.mapper.id_of(entity);
        let field = self.mapper.id_field();

        let position = records
            .iter()
            .position(|existing| record_id(existing, field).as_deref() == Some(id.trim()));
        match position {
            Some(index) => {
                records[index] = self.mapper.to_record(entity);
                self.store.write_records(&records)?;
                self.cache = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with the given identity. Returns whether
    /// anything was removed.
    pub fn delete(&mut self, id: &str) -> BankResult<bool> {
        let records = self.store.read_records();
        let id = id.trim();
        let field = self.mapper.id_field();

        let before = records.len();
        let remaining: Vec<_> = records
            .into_iter()
            .filter(|existing| record_id(existing, field).as_deref() != Some(id))
            .collect();
        if remaining.len() == before {
            return Ok(false);
        }

        self.store.write_records(&remaining)?;
        self.cache = None;
        Ok(true)
    }
}
