//! Account repository.

use super::JsonRepository;
use crate::config::{ACCOUNT_NUMBER_SEED, ACCOUNTS_FILE};
use crate::error::BankResult;
use crate::mappers::AccountMapper;
use crate::storage::JsonStore;
use std::path::Path;

/// Persistence of checking and savings accounts, keyed by account
/// number.
pub type AccountRepository = JsonRepository<AccountMapper>;

impl AccountRepository {
    /// Open the account repository under `dir`.
    pub fn open(dir: &Path) -> Self {
        Self::new(JsonStore::new(dir, ACCOUNTS_FILE), AccountMapper)
    }

    /// Allocate the next free account number:
    /// `max(existing numeric numbers, seed) + 1`.
    pub fn next_account_number(&mut self) -> BankResult<String> {
        let highest = self
            .list_all()?
            .iter()
            .filter_map(|account| account.number().parse::<i64>().ok())
            .max()
            .unwrap_or(ACCOUNT_NUMBER_SEED);
        Ok((highest + 1).to_string())
    }
}
