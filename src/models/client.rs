//! Client entity: a person plus an access credential and owned accounts.

use crate::error::{BankError, BankResult};
use crate::models::account::{Account, AccountKind};
use crate::models::person::Person;
use crate::validation;

/// A bank client.
///
/// Owns exactly one [`Person`] and an ordered list of accounts
/// (insertion order is account-creation order). The identity key is the
/// person's document number.
///
/// The password is a plaintext-equality secret — a known weakness of the
/// system this preserves; hashing would be a behavioral change.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    person: Person,
    password: String,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(person: Person, password: impl Into<String>, accounts: Vec<Account>) -> Self {
        Self {
            person,
            password: password.into(),
            accounts,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Identity key, delegated from the owned person.
    pub fn document_number(&self) -> &str {
        self.person.document_number()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut Vec<Account> {
        &mut self.accounts
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Check the supplied password against the stored one.
    pub fn verify_password(&self, attempt: &str) -> bool {
        self.password == attempt
    }

    /// Change the password after verifying the current one and the
    /// strength of the new one.
    pub fn change_password(&mut self, current: &str, new_password: &str) -> BankResult<()> {
        if !self.verify_password(current) {
            return Err(BankError::IncorrectPassword);
        }
        validation::client::password(new_password)
            .map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;
        self.password = new_password.to_string();
        Ok(())
    }

    /// Whether the client owns at least one account.
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// Whether the client already holds an account of the given kind.
    pub fn has_account_of(&self, kind: AccountKind) -> bool {
        self.accounts.iter().any(|account| account.kind() == kind)
    }

    /// Find an owned account by its number.
    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.number() == number.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::PersonFields;

    fn person() -> Person {
        Person::natural_with_address(
            PersonFields {
                name: "Ana Souza".into(),
                email: "ana@email.com".into(),
                document_number: "12345678900".into(),
                postal_code: "12345000".into(),
                address_number: "10".into(),
                phone: "31999998888".into(),
            },
            "01/01/1990",
            "Rua A, 10".into(),
        )
        .unwrap()
    }

    #[test]
    fn password_verification_is_plain_equality() {
        let client = Client::new(person(), "secret", Vec::new());
        assert!(client.verify_password("secret"));
        assert!(!client.verify_password("other"));
    }

    #[test]
    fn change_password_requires_current_and_strength() {
        let mut client = Client::new(person(), "secret", Vec::new());

        let err = client.change_password("wrong", "Str0ng!pass").unwrap_err();
        assert!(matches!(err, BankError::IncorrectPassword));

        let err = client.change_password("secret", "weak").unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));

        client.change_password("secret", "Str0ng!pass").unwrap();
        assert!(client.verify_password("Str0ng!pass"));
    }

    #[test]
    fn account_kind_lookup() {
        let checking = Account::new(AccountKind::Checking, "1001").unwrap();
        let client = Client::new(person(), "secret", vec![checking]);

        assert!(client.has_account_of(AccountKind::Checking));
        assert!(!client.has_account_of(AccountKind::Savings));
        assert!(client.account("1001").is_some());
        assert!(client.account("2002").is_none());
    }
}
