//! Application configuration and domain constants.
//!
//! Configuration is loaded from environment variables with the `envy`
//! crate; the fixed business parameters (transfer limits, fees, rates)
//! live here as constants so every layer reads the same values.

use serde::Deserialize;
use std::path::PathBuf;

/// Minimum age, in years, required of a natural person.
pub const MIN_AGE: i32 = 18;

/// Single-transfer ceiling for checking accounts.
pub const CHECKING_TRANSFER_LIMIT: f64 = 50_000.0;

/// Single-transfer ceiling for savings accounts.
pub const SAVINGS_TRANSFER_LIMIT: f64 = 1_000.0;

/// Interest rate credited by the savings monthly update.
pub const SAVINGS_MONTHLY_RATE: f64 = 0.005;

/// Maintenance fee debited by the checking monthly update.
pub const CHECKING_MAINTENANCE_FEE: f64 = 10.0;

/// Minimum number of digits in an account number. "1034" is valid,
/// "103" is not.
pub const MIN_ACCOUNT_NUMBER_LEN: usize = 4;

/// Seed for sequential account-number allocation: the first account
/// ever created receives `ACCOUNT_NUMBER_SEED + 1`.
pub const ACCOUNT_NUMBER_SEED: i64 = 1000;

/// Backing file names, one per entity family.
pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const CLIENTS_FILE: &str = "clients.json";
pub const PERSONS_FILE: &str = "persons.json";

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATA_DIR` (optional): directory holding the JSON backing files,
///   defaults to `database`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Default data directory if DATA_DIR is not set.
fn default_data_dir() -> PathBuf {
    PathBuf::from("database")
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first when present, then the environment
    /// is deserialized into a `Config`.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
    }

    /// Build a configuration rooted at an explicit directory.
    ///
    /// Used by tests and by embedders that manage their own paths.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
