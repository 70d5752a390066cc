//! Address-resolution capability.
//!
//! The domain layer never talks to the postal network service directly:
//! it receives an [`AddressResolver`] and asks it to turn a postal code
//! plus an address number into a full address string. A real
//! implementation backed by an HTTP lookup lives outside the core; the
//! in-memory implementations here serve tests and embedders.

use crate::error::{BankError, BankResult};
use crate::validation::{self, strip_non_digits};
use std::cell::RefCell;
use std::collections::HashMap;

/// Resolves a postal code and address number to a full address string.
pub trait AddressResolver {
    /// Resolve the address, failing with
    /// [`BankError::InvalidPostalCode`] when the code is unknown.
    fn resolve(&self, postal_code: &str, address_number: &str) -> BankResult<String>;
}

/// In-memory resolver backed by a fixed postal-code table.
#[derive(Debug, Default)]
pub struct StaticResolver {
    entries: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the street/district/city prefix for a postal code.
    pub fn insert(&mut self, postal_code: &str, location: impl Into<String>) {
        self.entries
            .insert(strip_non_digits(postal_code), location.into());
    }

    /// Builder-style variant of [`StaticResolver::insert`].
    pub fn with_entry(mut self, postal_code: &str, location: impl Into<String>) -> Self {
        self.insert(postal_code, location);
        self
    }
}

impl AddressResolver for StaticResolver {
    fn resolve(&self, postal_code: &str, address_number: &str) -> BankResult<String> {
        validation::person::postal_code(postal_code)
            .map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;
        validation::person::address_number(address_number)
            .map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;

        let digits = strip_non_digits(postal_code);
        match self.entries.get(&digits) {
            Some(location) => Ok(format!("{location}, {address_number} - {digits}")),
            None => Err(BankError::InvalidPostalCode(digits)),
        }
    }
}

/// Caching wrapper that remembers successful lookups per postal code,
/// avoiding repeated calls to a slow inner resolver within one process.
pub struct CachedResolver<R> {
    inner: R,
    cache: RefCell<HashMap<String, String>>,
}

impl<R: AddressResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<R: AddressResolver> AddressResolver for CachedResolver<R> {
    fn resolve(&self, postal_code: &str, address_number: &str) -> BankResult<String> {
        let digits = strip_non_digits(postal_code);
        if let Some(location) = self.cache.borrow().get(&digits) {
            return Ok(format!("{location}, {address_number} - {digits}"));
        }

        let resolved = self.inner.resolve(postal_code, address_number)?;
        // Store only the location prefix so different address numbers
        // share one cache entry.
        let suffix = format!(", {address_number} - {digits}");
        if let Some(prefix) = resolved.strip_suffix(&suffix) {
            self.cache.borrow_mut().insert(digits, prefix.to_string());
        }
        Ok(resolved)
    }
}
