//! Account record mapper.
//!
//! Record shape:
//! `{type: "checking"|"savings", number, balance, history, active}`.

use super::{RecordMapper, bool_field, f64_field, require_keys, string_array_field, string_field};
use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountKind};
use serde_json::{Map, Value};

const REQUIRED_KEYS: [&str; 5] = ["type", "number", "balance", "history", "active"];

pub struct AccountMapper;

impl RecordMapper for AccountMapper {
    type Entity = Account;

    fn id_field(&self) -> &'static str {
        "number"
    }

    fn id_of(&self, entity: &Account) -> String {
        entity.number().to_string()
    }

    fn from_record(&self, record: &Map<String, Value>) -> BankResult<Account> {
        require_keys(record, &REQUIRED_KEYS)?;

        let tag = string_field(record, "type")?;
        let kind = match tag.trim() {
            "checking" => AccountKind::Checking,
            "savings" => AccountKind::Savings,
            other => {
                return Err(BankError::UnknownType {
                    family: "account",
                    value: other.to_string(),
                });
            }
        };

        let number = string_field(record, "number")?;
        let balance = f64_field(record, "balance")?;
        let history = string_array_field(record, "history")?;
        let active = bool_field(record, "active")?;

        Account::from_parts(kind, number, balance, history, active)
    }

    fn to_record(&self, account: &Account) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("type".into(), Value::from(account.kind().type_tag()));
        record.insert("number".into(), Value::from(account.number()));
        record.insert("balance".into(), Value::from(account.balance()));
        record.insert(
            "history".into(),
            Value::from(account.history().to_vec()),
        );
        record.insert("active".into(), Value::from(account.is_active()));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checking_record() -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("type".into(), Value::from("checking"));
        record.insert("number".into(), Value::from("1001"));
        record.insert("balance".into(), Value::from(150.75));
        record.insert("history".into(), Value::from(vec!["Initial deposit"]));
        record.insert("active".into(), Value::from(true));
        record
    }

    #[test]
    fn from_record_builds_checking_account() {
        let account = AccountMapper.from_record(&checking_record()).unwrap();
        assert_eq!(account.kind(), AccountKind::Checking);
        assert_eq!(account.number(), "1001");
        assert_eq!(account.balance(), 150.75);
        assert_eq!(account.history(), ["Initial deposit"]);
        assert!(account.is_active());
    }

    #[test]
    fn from_record_accepts_numeric_account_number() {
        let mut record = checking_record();
        record.insert("number".into(), Value::from(1001));
        let account = AccountMapper.from_record(&record).unwrap();
        assert_eq!(account.number(), "1001");
    }

    #[test]
    fn from_record_builds_inactive_savings_account() {
        let mut record = checking_record();
        record.insert("type".into(), Value::from("savings"));
        record.insert("active".into(), Value::from(false));

        let account = AccountMapper.from_record(&record).unwrap();
        assert_eq!(account.kind(), AccountKind::Savings);
        assert!(!account.is_active());
    }

    #[test]
    fn from_record_lists_every_missing_key() {
        let mut record = checking_record();
        record.remove("number");
        record.remove("active");

        let err = AccountMapper.from_record(&record).unwrap_err();
        match err {
            BankError::MissingFields(missing) => {
                assert_eq!(missing, vec!["number".to_string(), "active".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_record_rejects_unknown_type() {
        let mut record = checking_record();
        record.insert("type".into(), Value::from("investment"));

        let err = AccountMapper.from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            BankError::UnknownType { family: "account", value } if value == "investment"
        ));
    }

    #[test]
    fn from_record_rejects_non_string_history_entry() {
        let mut record = checking_record();
        record.insert("history".into(), Value::from(vec![Value::from(42)]));
        assert!(matches!(
            AccountMapper.from_record(&record),
            Err(BankError::Validation(_))
        ));
    }

    #[test]
    fn round_trip_preserves_observable_fields() {
        let account = AccountMapper.from_record(&checking_record()).unwrap();
        let record = AccountMapper.to_record(&account);
        let back = AccountMapper.from_record(&record).unwrap();
        assert_eq!(account, back);
    }
}
