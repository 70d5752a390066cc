//! JSON-file backing store.
//!
//! Each entity family is persisted as one JSON array of objects. All
//! writes rewrite the whole file; there is no partial or append write,
//! no locking, and no cross-process coordination (last full-file write
//! wins). Callers re-read the current file content before every
//! mutation.

use crate::error::BankResult;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to one backing JSON file.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store for `file_name` under `dir`. The file itself is
    /// created lazily on the first write.
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
        }
    }

    /// Read every record in the file.
    ///
    /// A missing, unreadable, or malformed file is treated as an empty
    /// collection; malformed content is logged but never fatal.
    pub fn read_records(&self) -> Vec<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values
                .into_iter()
                .filter_map(|value| match value {
                    Value::Object(record) => Some(record),
                    _ => None,
                })
                .collect(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "malformed backing file, treating as empty");
                Vec::new()
            }
        }
    }

    /// Rewrite the whole file with the given records.
    pub fn write_records(&self, records: &[Map<String, Value>]) -> BankResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(records).map_err(std::io::Error::from)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}
