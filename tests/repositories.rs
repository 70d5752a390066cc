//! Integration tests for the repository layer against real
//! tempdir-backed JSON files.

use banking_core::address::StaticResolver;
use banking_core::models::{Account, AccountKind, Client, Person, PersonFields};
use banking_core::repository::{AccountRepository, ClientRepository, PersonRepository};
use banking_core::storage::JsonStore;
use banking_core::{BankError, Config, Repositories};
use serde_json::{Map, Value};
use tempfile::TempDir;

fn resolver() -> StaticResolver {
    StaticResolver::new().with_entry("12345000", "Rua das Flores - Centro")
}

fn person(document: &str, email: &str) -> Person {
    Person::natural(
        PersonFields {
            name: "Ana Souza".into(),
            email: email.into(),
            document_number: document.into(),
            postal_code: "12345000".into(),
            address_number: "10".into(),
            phone: "31999998888".into(),
        },
        "01/01/1990",
        &resolver(),
    )
    .unwrap()
}

fn account(number: &str, balance: f64) -> Account {
    Account::from_parts(AccountKind::Checking, number, balance, Vec::new(), true).unwrap()
}

#[test]
fn save_enforces_unique_account_numbers() {
    let dir = TempDir::new().unwrap();
    let mut repo = AccountRepository::open(dir.path());

    repo.save(&account("1001", 10.0)).unwrap();
    let err = repo.save(&account("1001", 99.0)).unwrap_err();
    assert!(matches!(
        err,
        BankError::DuplicateKey { field: "number", .. }
    ));

    // The failed save left exactly one record behind.
    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].balance(), 10.0);
}

#[test]
fn find_after_update_reflects_the_write() {
    let dir = TempDir::new().unwrap();
    let mut repo = AccountRepository::open(dir.path());

    repo.save(&account("1001", 10.0)).unwrap();
    // Warm the cache, then write through the same repository.
    assert_eq!(repo.list_all().unwrap().len(), 1);

    let updated = account("1001", 250.0);
    assert!(repo.update(&updated).unwrap());

    let found = repo.find_by_id("1001").unwrap().unwrap();
    assert_eq!(found.balance(), 250.0);
}

#[test]
fn update_of_unknown_id_returns_false() {
    let dir = TempDir::new().unwrap();
    let mut repo = AccountRepository::open(dir.path());
    assert!(!repo.update(&account("9999", 1.0)).unwrap());
}

#[test]
fn delete_removes_exactly_the_matching_record() {
    let dir = TempDir::new().unwrap();
    let mut repo = AccountRepository::open(dir.path());
    repo.save(&account("1001", 0.0)).unwrap();
    repo.save(&account("1002", 0.0)).unwrap();

    assert!(repo.delete("1001").unwrap());
    assert!(!repo.delete("1001").unwrap());
    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn lookup_matches_numeric_record_representation() {
    let dir = TempDir::new().unwrap();

    // A hand-written file may carry the number as a JSON number.
    let mut record = Map::new();
    record.insert("type".into(), Value::from("checking"));
    record.insert("number".into(), Value::from(1001));
    record.insert("balance".into(), Value::from(5.0));
    record.insert("history".into(), Value::from(Vec::<String>::new()));
    record.insert("active".into(), Value::from(true));
    JsonStore::new(dir.path(), "accounts.json")
        .write_records(&[record])
        .unwrap();

    let mut repo = AccountRepository::open(dir.path());
    let found = repo.find_by_id("1001").unwrap();
    assert!(found.is_some());
}

#[test]
fn next_account_number_is_seeded_and_sequential() {
    let dir = TempDir::new().unwrap();
    let mut repo = AccountRepository::open(dir.path());

    assert_eq!(repo.next_account_number().unwrap(), "1001");
    repo.save(&account("1001", 0.0)).unwrap();
    repo.save(&account("1005", 0.0)).unwrap();
    assert_eq!(repo.next_account_number().unwrap(), "1006");
}

#[test]
fn person_repository_checks_email_uniqueness() {
    let dir = TempDir::new().unwrap();
    let mut repo = PersonRepository::open(dir.path());
    repo.save(&person("12345678900", "ana@email.com")).unwrap();

    assert!(repo.email_exists("ana@email.com"));
    assert!(!repo.email_exists("other@email.com"));
}

#[test]
fn client_is_reconstructed_and_dangling_accounts_are_dropped() {
    let dir = TempDir::new().unwrap();
    let mut persons = PersonRepository::open(dir.path());
    let mut accounts = AccountRepository::open(dir.path());
    let mut clients = ClientRepository::open(dir.path());

    let owner = person("12345678900", "ana@email.com");
    persons.save(&owner).unwrap();
    accounts.save(&account("1001", 40.0)).unwrap();

    let client = Client::new(
        owner,
        "secret",
        vec![account("1001", 40.0), account("2009", 0.0)],
    );
    clients.save(&client).unwrap();

    // "2009" was never persisted, so reconstruction ignores it.
    let loaded = clients
        .find_by_id("12345678900", &mut persons, &mut accounts)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.accounts().len(), 1);
    assert_eq!(loaded.accounts()[0].number(), "1001");
    assert!(loaded.verify_password("secret"));
}

#[test]
fn client_lookup_by_account_number_scans_membership() {
    let dir = TempDir::new().unwrap();
    let mut repos = Repositories::open(&Config::with_data_dir(dir.path()));

    let owner = person("12345678900", "ana@email.com");
    repos.persons.save(&owner).unwrap();
    repos.accounts.save(&account("1001", 0.0)).unwrap();
    repos
        .clients
        .save(&Client::new(owner, "secret", vec![account("1001", 0.0)]))
        .unwrap();

    let found = repos
        .clients
        .find_by_account_number("1001", &mut repos.persons, &mut repos.accounts)
        .unwrap();
    assert!(found.is_some());

    let missing = repos
        .clients
        .find_by_account_number("7777", &mut repos.persons, &mut repos.accounts)
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn client_reads_reflect_account_writes_after_cache_warmup() {
    let dir = TempDir::new().unwrap();
    let mut repos = Repositories::open(&Config::with_data_dir(dir.path()));

    let owner = person("12345678900", "ana@email.com");
    repos.persons.save(&owner).unwrap();
    repos.accounts.save(&account("1001", 40.0)).unwrap();
    repos
        .clients
        .save(&Client::new(owner, "secret", vec![account("1001", 40.0)]))
        .unwrap();

    // Warm the client-side caches.
    let loaded = repos
        .clients
        .find_by_id("12345678900", &mut repos.persons, &mut repos.accounts)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.accounts()[0].balance(), 40.0);

    // Write through the account repository only.
    assert!(repos.accounts.update(&account("1001", 15.0)).unwrap());

    let reloaded = repos
        .clients
        .find_by_id("12345678900", &mut repos.persons, &mut repos.accounts)
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.accounts()[0].balance(), 15.0);

    let by_number = repos
        .clients
        .find_by_account_number("1001", &mut repos.persons, &mut repos.accounts)
        .unwrap()
        .unwrap();
    assert_eq!(by_number.accounts()[0].balance(), 15.0);
}

#[test]
fn duplicate_client_save_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut persons = PersonRepository::open(dir.path());
    let mut clients = ClientRepository::open(dir.path());

    let owner = person("12345678900", "ana@email.com");
    persons.save(&owner).unwrap();

    clients
        .save(&Client::new(owner.clone(), "secret", Vec::new()))
        .unwrap();
    let err = clients
        .save(&Client::new(owner, "other", Vec::new()))
        .unwrap_err();
    assert!(matches!(err, BankError::DuplicateKey { .. }));
}
