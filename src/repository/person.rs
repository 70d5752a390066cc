//! Person repository.

use super::JsonRepository;
use crate::config::PERSONS_FILE;
use crate::mappers::PersonMapper;
use crate::storage::JsonStore;
use serde_json::Value;
use std::path::Path;

/// Persistence of natural and legal persons, keyed by document number.
pub type PersonRepository = JsonRepository<PersonMapper>;

impl PersonRepository {
    /// Open the person repository under `dir`.
    pub fn open(dir: &Path) -> Self {
        Self::new(JsonStore::new(dir, PERSONS_FILE), PersonMapper)
    }

    /// Whether any stored person already uses this email.
    ///
    /// Scans raw records so registration can check uniqueness without
    /// constructing entities first.
    pub fn email_exists(&self, email: &str) -> bool {
        self.records()
            .iter()
            .any(|record| record.get("email").and_then(Value::as_str) == Some(email))
    }
}
