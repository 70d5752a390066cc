//! Mapper layer: pure bidirectional conversion between domain entities
//! and plain key-value records (`serde_json` object maps).
//!
//! `from_record` and `to_record` are deterministic and mutually inverse
//! modulo the documented omission rules (blank trade names are dropped,
//! birth dates appear only on natural persons). Records reaching
//! `from_record` come from persisted files, so malformed input means a
//! hand-edited or corrupted file: missing keys are reported all at once,
//! unknown discriminators by value.

pub mod account;
pub mod person;

pub use account::AccountMapper;
pub use person::PersonMapper;

use crate::error::{BankError, BankResult};
use serde_json::{Map, Value};

/// Conversion contract between one entity family and its records,
/// including the name of the identity field enforced by the repository.
pub trait RecordMapper {
    type Entity;

    /// Name of the unique identity field in the record.
    fn id_field(&self) -> &'static str;

    /// Identity value of an in-memory entity.
    fn id_of(&self, entity: &Self::Entity) -> String;

    fn from_record(&self, record: &Map<String, Value>) -> BankResult<Self::Entity>;

    fn to_record(&self, entity: &Self::Entity) -> Map<String, Value>;
}

/// Fail with [`BankError::MissingFields`] listing every absent key.
pub(crate) fn require_keys(record: &Map<String, Value>, required: &[&str]) -> BankResult<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !record.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(BankError::MissingFields(missing))
    }
}

/// Read a field as a string, accepting a JSON number so numeric and
/// string representations of the same id both map.
pub(crate) fn string_field(record: &Map<String, Value>, key: &str) -> BankResult<String> {
    match record.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(BankError::Validation(vec![format!(
            "Field '{key}' must be a string."
        )])),
    }
}

pub(crate) fn f64_field(record: &Map<String, Value>, key: &str) -> BankResult<f64> {
    record
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| BankError::Validation(vec![format!("Field '{key}' must be a number.")]))
}

pub(crate) fn bool_field(record: &Map<String, Value>, key: &str) -> BankResult<bool> {
    record
        .get(key)
        .and_then(Value::as_bool)
        .ok_or_else(|| BankError::Validation(vec![format!("Field '{key}' must be a boolean.")]))
}

/// Read a field as an array of strings; any non-string entry is
/// rejected.
pub(crate) fn string_array_field(
    record: &Map<String, Value>,
    key: &str,
) -> BankResult<Vec<String>> {
    let items = record.get(key).and_then(Value::as_array).ok_or_else(|| {
        BankError::Validation(vec![format!("Field '{key}' must be a list of strings.")])
    })?;

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(BankError::Validation(vec![format!(
                "Every entry of '{key}' must be a string."
            )])),
        })
        .collect()
}
