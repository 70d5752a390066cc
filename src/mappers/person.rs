//! Person record mapper.
//!
//! Record shape:
//! `{type: "fisica"|"juridica", name, email, documentNumber, postalCode,
//! addressNumber, address, phone, [birthDate], [tradeName]}`.
//!
//! `birthDate` (`dd/mm/yyyy`) is written only for natural persons;
//! `tradeName` only when non-blank — a blank trade name is omitted
//! entirely, never serialized as an empty string.

use super::{RecordMapper, require_keys, string_field};
use crate::error::{BankError, BankResult};
use crate::models::{Person, PersonFields, PersonKind};
use crate::validation::person::BIRTH_DATE_FORMAT;
use serde_json::{Map, Value};

const COMMON_KEYS: [&str; 8] = [
    "type",
    "name",
    "email",
    "documentNumber",
    "postalCode",
    "addressNumber",
    "address",
    "phone",
];

pub struct PersonMapper;

impl PersonMapper {
    fn fields_of(record: &Map<String, Value>) -> BankResult<PersonFields> {
        Ok(PersonFields {
            name: string_field(record, "name")?,
            email: string_field(record, "email")?,
            document_number: string_field(record, "documentNumber")?,
            postal_code: string_field(record, "postalCode")?,
            address_number: string_field(record, "addressNumber")?,
            phone: string_field(record, "phone")?,
        })
    }
}

impl RecordMapper for PersonMapper {
    type Entity = Person;

    fn id_field(&self) -> &'static str {
        "documentNumber"
    }

    fn id_of(&self, entity: &Person) -> String {
        entity.document_number().to_string()
    }

    fn from_record(&self, record: &Map<String, Value>) -> BankResult<Person> {
        // An absent discriminator is a missing key, not an unknown type;
        // report it together with any other absent shared key.
        if !record.contains_key("type") {
            require_keys(record, &COMMON_KEYS)?;
        }

        let tag = record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match tag.as_str() {
            "fisica" => {
                let mut required = COMMON_KEYS.to_vec();
                required.push("birthDate");
                require_keys(record, &required)?;

                let fields = Self::fields_of(record)?;
                let birth_date = string_field(record, "birthDate")?;
                let address = string_field(record, "address")?;
                Person::natural_with_address(fields, &birth_date, address)
            }
            "juridica" => {
                require_keys(record, &COMMON_KEYS)?;

                let fields = Self::fields_of(record)?;
                let trade_name = match record.get("tradeName") {
                    Some(Value::String(s)) => s.clone(),
                    _ => String::new(),
                };
                let address = string_field(record, "address")?;
                Person::legal_with_address(fields, &trade_name, address)
            }
            other => Err(BankError::UnknownType {
                family: "person",
                value: other.to_string(),
            }),
        }
    }

    fn to_record(&self, person: &Person) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("type".into(), Value::from(person.type_tag()));
        record.insert("name".into(), Value::from(person.name()));
        record.insert("email".into(), Value::from(person.email()));
        record.insert("documentNumber".into(), Value::from(person.document_number()));
        record.insert("postalCode".into(), Value::from(person.postal_code()));
        record.insert("addressNumber".into(), Value::from(person.address_number()));
        record.insert("address".into(), Value::from(person.address()));
        record.insert("phone".into(), Value::from(person.phone()));

        match person.kind() {
            PersonKind::Natural { birth_date } => {
                record.insert(
                    "birthDate".into(),
                    Value::from(birth_date.format(BIRTH_DATE_FORMAT).to_string()),
                );
            }
            PersonKind::Legal { trade_name } => {
                if !trade_name.trim().is_empty() {
                    record.insert("tradeName".into(), Value::from(trade_name.as_str()));
                }
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn natural_record() -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("type".into(), Value::from("fisica"));
        record.insert("name".into(), Value::from("Victor"));
        record.insert("email".into(), Value::from("victor@email.com"));
        record.insert("documentNumber".into(), Value::from("12345678900"));
        record.insert("postalCode".into(), Value::from("12345000"));
        record.insert("addressNumber".into(), Value::from("10"));
        record.insert("address".into(), Value::from("Rua dos Testes, 10"));
        record.insert("phone".into(), Value::from("31999998888"));
        record.insert("birthDate".into(), Value::from("01/01/1990"));
        record
    }

    fn legal_record() -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("type".into(), Value::from("juridica"));
        record.insert("name".into(), Value::from("Empresa Victor SA"));
        record.insert("email".into(), Value::from("contato@email.com"));
        record.insert("documentNumber".into(), Value::from("12345678000199"));
        record.insert("postalCode".into(), Value::from("70000100"));
        record.insert("addressNumber".into(), Value::from("456"));
        record.insert("address".into(), Value::from("Praça Principal, 456"));
        record.insert("phone".into(), Value::from("6132109876"));
        record.insert("tradeName".into(), Value::from("Modelo Fantasia"));
        record
    }

    #[test]
    fn from_record_builds_natural_person() {
        let person = PersonMapper.from_record(&natural_record()).unwrap();
        assert_eq!(person.type_tag(), "fisica");
        assert_eq!(person.name(), "Victor");
        assert_eq!(person.document_number(), "12345678900");
        assert_eq!(
            person.birth_date(),
            Some(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
        );
    }

    #[test]
    fn from_record_builds_legal_person_with_trade_name() {
        let person = PersonMapper.from_record(&legal_record()).unwrap();
        assert_eq!(person.type_tag(), "juridica");
        assert_eq!(person.trade_name(), Some("Modelo Fantasia"));
    }

    #[test]
    fn from_record_defaults_absent_trade_name_to_empty() {
        let mut record = legal_record();
        record.remove("tradeName");
        let person = PersonMapper.from_record(&record).unwrap();
        assert_eq!(person.trade_name(), Some(""));
    }

    #[test]
    fn from_record_reports_absent_type_as_missing_key() {
        let mut record = natural_record();
        record.remove("type");
        record.remove("name");
        let err = PersonMapper.from_record(&record).unwrap_err();
        match err {
            BankError::MissingFields(missing) => {
                assert!(missing.contains(&"type".to_string()));
                assert!(missing.contains(&"name".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_record_rejects_unknown_type() {
        let mut record = natural_record();
        record.insert("type".into(), Value::from("argentino"));
        let err = PersonMapper.from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            BankError::UnknownType { family: "person", value } if value == "argentino"
        ));
    }

    #[test]
    fn from_record_lists_missing_keys() {
        let mut record = natural_record();
        record.remove("name");
        record.remove("birthDate");
        let err = PersonMapper.from_record(&record).unwrap_err();
        match err {
            BankError::MissingFields(missing) => {
                assert!(missing.contains(&"name".to_string()));
                assert!(missing.contains(&"birthDate".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn to_record_formats_birth_date_and_omits_trade_name() {
        let person = PersonMapper.from_record(&natural_record()).unwrap();
        let record = PersonMapper.to_record(&person);
        assert_eq!(record.get("birthDate"), Some(&Value::from("01/01/1990")));
        assert!(!record.contains_key("tradeName"));
    }

    #[test]
    fn to_record_omits_blank_trade_name() {
        let mut record = legal_record();
        record.insert("tradeName".into(), Value::from("   "));
        let person = PersonMapper.from_record(&record).unwrap();

        let out = PersonMapper.to_record(&person);
        assert!(!out.contains_key("tradeName"));
        assert!(!out.contains_key("birthDate"));
    }

    #[test]
    fn round_trip_preserves_observable_fields() {
        for record in [natural_record(), legal_record()] {
            let person = PersonMapper.from_record(&record).unwrap();
            let back = PersonMapper
                .from_record(&PersonMapper.to_record(&person))
                .unwrap();
            assert_eq!(person, back);
        }
    }
}
