//! Retail-banking core.
//!
//! Domain model and persistence for a small retail-banking back end:
//! people (natural and legal), clients, checking and savings accounts,
//! and money transfers, persisted as one JSON document list per entity
//! family.
//!
//! # Architecture
//!
//! - **Validation**: pure field validators that collect every error
//! - **Entities**: `Person`, `Client`, `Account` enforce their
//!   invariants at construction and through guarded mutation
//! - **Mappers**: pure, invertible entity/record conversion with type
//!   discrimination
//! - **Repositories**: a generic JSON-file DAO with unique-key
//!   enforcement and invalidation-on-write caching
//! - **Services**: registration, account lifecycle, transfers, and
//!   profile reads over a shared [`Repositories`] handle
//!
//! The GUI, session handling, and the real postal-code lookup live
//! outside this crate; the latter is injected through
//! [`address::AddressResolver`].

pub mod address;
pub mod config;
pub mod error;
pub mod mappers;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use error::{BankError, BankResult};
pub use models::{Account, AccountKind, Client, Person, PersonFields, PersonKind};
pub use repository::Repositories;
