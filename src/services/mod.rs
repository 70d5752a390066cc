//! Domain services.
//!
//! Services orchestrate repositories and entities, separated from any
//! presentation layer. Each service is a free function taking the
//! shared [`Repositories`](crate::repository::Repositories) handle,
//! validating first and mutating only after every check passed. They
//! return `Result<T, BankError>`; the out-of-core controller layer
//! translates errors into user-facing responses.

pub mod accounts;
pub mod profile;
pub mod registration;
pub mod transfer;

pub use accounts::{
    close_account, list_accounts, open_account, reactivate_account, recipient_info, statement,
};
pub use profile::{Profile, change_password, client_by_account, profile, update_client};
pub use registration::{NewClient, register_client};
pub use transfer::{TransferRequest, process_transfer};
