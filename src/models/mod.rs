//! Domain entities.
//!
//! This module contains the account, person, and client entities that
//! hold state and enforce the per-field invariants at construction.

pub mod account;
pub mod client;
pub mod person;

pub use account::{Account, AccountKind};
pub use client::Client;
pub use person::{Person, PersonFields, PersonKind};
