//! Person entity: natural (CPF) and legal (CNPJ) variants.
//!
//! A person carries identity and contact data plus a resolved address.
//! Construction validates every field, collecting all errors, and the
//! registration path additionally resolves the address through the
//! injected [`AddressResolver`] — a person is never usable without a
//! populated address.

use crate::address::AddressResolver;
use crate::error::{BankError, BankResult};
use crate::validation;
use chrono::NaiveDate;
use std::fmt;

/// Fields shared by both person variants, as captured from input.
#[derive(Debug, Clone)]
pub struct PersonFields {
    pub name: String,
    pub email: String,
    pub document_number: String,
    pub postal_code: String,
    pub address_number: String,
    pub phone: String,
}

/// Variant-specific data.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonKind {
    /// Natural person, identified by CPF.
    Natural { birth_date: NaiveDate },
    /// Legal person, identified by CNPJ. The trade name is optional.
    Legal { trade_name: String },
}

/// A person, natural or legal.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    email: String,
    document_number: String,
    postal_code: String,
    address_number: String,
    address: String,
    phone: String,
    kind: PersonKind,
}

impl Person {
    /// Create a natural person, resolving the address through the
    /// injected capability. `birth_date` is given as `dd/mm/yyyy`.
    pub fn natural(
        fields: PersonFields,
        birth_date: &str,
        resolver: &dyn AddressResolver,
    ) -> BankResult<Self> {
        let address = resolver.resolve(&fields.postal_code, &fields.address_number)?;
        Self::natural_with_address(fields, birth_date, address)
    }

    /// Create a legal person, resolving the address through the
    /// injected capability.
    pub fn legal(
        fields: PersonFields,
        trade_name: &str,
        resolver: &dyn AddressResolver,
    ) -> BankResult<Self> {
        let address = resolver.resolve(&fields.postal_code, &fields.address_number)?;
        Self::legal_with_address(fields, trade_name, address)
    }

    /// Rebuild a natural person with an already-resolved address, as
    /// read back from a persisted record.
    pub(crate) fn natural_with_address(
        fields: PersonFields,
        birth_date: &str,
        address: String,
    ) -> BankResult<Self> {
        let errors = validation::person::natural_person_fields(
            &fields.name,
            &fields.email,
            &fields.document_number,
            &fields.postal_code,
            &fields.address_number,
            &fields.phone,
            birth_date,
        );
        if !errors.is_empty() {
            return Err(BankError::Validation(errors));
        }

        // The aggregate already proved the date parses.
        let birth_date = validation::person::birth_date(birth_date)
            .map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;

        Ok(Self::assemble(
            fields,
            address,
            PersonKind::Natural { birth_date },
        ))
    }

    /// Rebuild a legal person with an already-resolved address.
    pub(crate) fn legal_with_address(
        fields: PersonFields,
        trade_name: &str,
        address: String,
    ) -> BankResult<Self> {
        let errors = validation::person::legal_person_fields(
            &fields.name,
            &fields.email,
            &fields.document_number,
            &fields.postal_code,
            &fields.address_number,
            &fields.phone,
        );
        if !errors.is_empty() {
            return Err(BankError::Validation(errors));
        }

        Ok(Self::assemble(
            fields,
            address,
            PersonKind::Legal {
                trade_name: trade_name.to_string(),
            },
        ))
    }

    fn assemble(fields: PersonFields, address: String, kind: PersonKind) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            document_number: fields.document_number,
            postal_code: fields.postal_code,
            address_number: fields.address_number,
            address,
            phone: fields.phone,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The unique identity key: CPF for natural persons, CNPJ for legal
    /// ones.
    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn address_number(&self) -> &str {
        &self.address_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn kind(&self) -> &PersonKind {
        &self.kind
    }

    /// Serialization tag of this variant.
    pub fn type_tag(&self) -> &'static str {
        match self.kind {
            PersonKind::Natural { .. } => "fisica",
            PersonKind::Legal { .. } => "juridica",
        }
    }

    /// Birth date, present only for natural persons.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        match &self.kind {
            PersonKind::Natural { birth_date } => Some(*birth_date),
            PersonKind::Legal { .. } => None,
        }
    }

    /// Trade name, present only for legal persons (possibly blank).
    pub fn trade_name(&self) -> Option<&str> {
        match &self.kind {
            PersonKind::Natural { .. } => None,
            PersonKind::Legal { trade_name } => Some(trade_name),
        }
    }

    // Setters re-validate the incoming value; the document number is the
    // identity key and is immutable.

    pub fn set_name(&mut self, name: &str) -> BankResult<()> {
        validation::person::name(name)
            .map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> BankResult<()> {
        validation::person::email(email)
            .map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;
        self.email = email.to_string();
        Ok(())
    }

    pub fn set_phone(&mut self, phone: &str) -> BankResult<()> {
        validation::person::phone(phone)
            .map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;
        self.phone = phone.to_string();
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PersonKind::Natural { .. } => {
                write!(f, "{} (CPF: {})", self.name, self.document_number)
            }
            PersonKind::Legal { trade_name } => {
                let shown = if trade_name.trim().is_empty() {
                    "Company without trade name"
                } else {
                    trade_name.as_str()
                };
                write!(f, "{} (CNPJ: {})", shown, self.document_number)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::StaticResolver;

    fn resolver() -> StaticResolver {
        StaticResolver::new().with_entry("12345000", "Rua das Flores - Centro")
    }

    fn fields() -> PersonFields {
        PersonFields {
            name: "Victor Silva".into(),
            email: "victor@email.com".into(),
            document_number: "12345678900".into(),
            postal_code: "12345000".into(),
            address_number: "10".into(),
            phone: "31999998888".into(),
        }
    }

    #[test]
    fn natural_person_construction_resolves_address() {
        let person = Person::natural(fields(), "01/01/1990", &resolver()).unwrap();
        assert_eq!(person.type_tag(), "fisica");
        assert_eq!(
            person.birth_date(),
            Some(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
        );
        assert!(person.address().contains("Rua das Flores"));
    }

    #[test]
    fn construction_collects_every_field_error() {
        let mut bad = fields();
        bad.name = "Victor 2".into();
        bad.email = "not-an-email".into();
        bad.document_number = "123".into();

        let err = Person::natural_with_address(bad, "zzz", "addr".into()).unwrap_err();
        match err {
            BankError::Validation(errors) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unresolvable_postal_code_fails_construction() {
        let mut bad = fields();
        bad.postal_code = "99999999".into();
        let err = Person::natural(bad, "01/01/1990", &resolver()).unwrap_err();
        assert!(matches!(err, BankError::InvalidPostalCode(_)));
    }

    #[test]
    fn legal_person_display_falls_back_without_trade_name() {
        let mut f = fields();
        f.document_number = "12345678000199".into();

        let named = Person::legal_with_address(f.clone(), "Fantasia Ltda", "addr".into()).unwrap();
        assert!(named.to_string().starts_with("Fantasia Ltda"));

        let unnamed = Person::legal_with_address(f, "   ", "addr".into()).unwrap();
        assert!(unnamed.to_string().starts_with("Company without trade name"));
    }

    #[test]
    fn setters_revalidate() {
        let mut person = Person::natural(fields(), "01/01/1990", &resolver()).unwrap();
        assert!(person.set_email("new@email.com").is_ok());
        assert!(person.set_email("broken").is_err());
        assert_eq!(person.email(), "new@email.com");
    }
}
