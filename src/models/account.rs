//! Bank account entity: checking and savings variants.
//!
//! An account holds a unique numeric identifier, a balance, an
//! append-only history of timestamped operation records, and an
//! active/inactive flag. The variant decides the transfer ceiling and
//! the monthly-update rule.
//!
//! # Balance Invariant
//!
//! Every balance mutation goes through one internal setter that
//! re-validates finiteness and sign. Only the checking maintenance fee
//! may drive the balance negative; transfers and interest credits never
//! do.

use crate::config::{
    CHECKING_MAINTENANCE_FEE, CHECKING_TRANSFER_LIMIT, SAVINGS_MONTHLY_RATE,
    SAVINGS_TRANSFER_LIMIT,
};
use crate::error::{BankError, BankResult};
use crate::validation;
use chrono::Local;
use std::fmt;

/// Timestamp format used on history lines.
const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The two account variants offered by the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
}

impl AccountKind {
    /// Serialization tag for this variant.
    pub fn type_tag(self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
        }
    }
}

/// A bank account.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: String,
    balance: f64,
    history: Vec<String>,
    active: bool,
    kind: AccountKind,
}

impl Account {
    /// Create a brand-new active account with zero balance.
    pub fn new(kind: AccountKind, number: impl Into<String>) -> BankResult<Self> {
        Self::from_parts(kind, number, 0.0, Vec::new(), true)
    }

    /// Rebuild an account from its persisted parts.
    ///
    /// Every field is validated; all errors are collected and returned
    /// together as [`BankError::Validation`].
    pub fn from_parts(
        kind: AccountKind,
        number: impl Into<String>,
        balance: f64,
        history: Vec<String>,
        active: bool,
    ) -> BankResult<Self> {
        let number = number.into();
        let errors = validation::account::account_fields(&number, balance);
        if !errors.is_empty() {
            return Err(BankError::Validation(errors));
        }

        Ok(Self {
            number,
            balance,
            history,
            active,
            kind,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Maximum amount allowed in a single transfer for this variant.
    pub fn transfer_limit(&self) -> f64 {
        match self.kind {
            AccountKind::Checking => CHECKING_TRANSFER_LIMIT,
            AccountKind::Savings => SAVINGS_TRANSFER_LIMIT,
        }
    }

    /// Transfer `amount` to `destination`.
    ///
    /// Checks run in a fixed order, short-circuiting on the first
    /// failure, and every check precedes any mutation, so a rejected
    /// transfer leaves both balances untouched:
    ///
    /// 1. Source must be active
    /// 2. Destination must be active
    /// 3. Amount must be positive
    /// 4. Amount must not exceed the source balance
    /// 5. Amount must not exceed the source transfer limit
    ///
    /// On success the source is debited, the destination credited, and
    /// both histories receive a timestamped line referencing the
    /// counterpart account.
    pub fn transfer(&mut self, destination: &mut Account, amount: f64) -> BankResult<()> {
        if !self.active {
            return Err(BankError::InactiveAccount(self.number.clone()));
        }
        if !destination.active {
            return Err(BankError::InactiveAccount(destination.number.clone()));
        }
        if amount <= 0.0 {
            return Err(BankError::InvalidAmount(
                "The transfer amount must be positive.".to_string(),
            ));
        }
        if amount > self.balance {
            return Err(BankError::InsufficientFunds);
        }
        if amount > self.transfer_limit() {
            return Err(BankError::LimitExceeded(self.transfer_limit()));
        }

        self.set_balance(self.balance - amount, false)?;
        destination.set_balance(destination.balance + amount, false)?;
        self.record_operation(&format!(
            "Transfer of {amount:.2} to account {}",
            destination.number
        ));
        destination.record_operation(&format!(
            "Received {amount:.2} from account {}",
            self.number
        ));
        Ok(())
    }

    /// Apply the monthly update rule of this variant.
    ///
    /// Checking accounts are debited the fixed maintenance fee, which
    /// may drive the balance negative. Savings accounts are credited
    /// interest of `balance * rate` and never go negative. Both fail on
    /// an inactive account and append a descriptive history line with
    /// the computed amount.
    pub fn monthly_update(&mut self) -> BankResult<()> {
        if !self.active {
            return Err(BankError::InactiveAccount(self.number.clone()));
        }

        match self.kind {
            AccountKind::Checking => {
                self.set_balance(self.balance - CHECKING_MAINTENANCE_FEE, true)?;
                self.record_operation(&format!(
                    "Monthly update: maintenance fee of {CHECKING_MAINTENANCE_FEE:.2} charged."
                ));
            }
            AccountKind::Savings => {
                let interest = self.balance * SAVINGS_MONTHLY_RATE;
                self.set_balance(self.balance + interest, false)?;
                self.record_operation(&format!(
                    "Monthly update: interest of {interest:.2} applied."
                ));
            }
        }
        Ok(())
    }

    /// Close the account, making it inactive, and record the closure.
    ///
    /// Closing an already-closed account appends another closure line;
    /// the permissive behavior is preserved deliberately.
    pub fn close(&mut self) {
        self.active = false;
        self.record_operation("Account closed");
    }

    /// Reactivate a closed account. No other invariant is re-checked.
    pub fn reactivate(&mut self) {
        self.active = true;
    }

    /// The single balance setter. Re-validates finiteness always, and
    /// sign unless `allow_negative` is set (monthly maintenance fee
    /// only). The operation itself is not recorded here.
    fn set_balance(&mut self, new_balance: f64, allow_negative: bool) -> BankResult<()> {
        let check = if allow_negative {
            validation::account::balance_free(new_balance)
        } else {
            validation::account::balance_non_negative(new_balance)
        };
        check.map_err(|err| BankError::Validation(vec![err.message().to_string()]))?;
        self.balance = new_balance;
        Ok(())
    }

    /// Append a timestamped record of an operation to the history.
    fn record_operation(&mut self, description: &str) {
        let stamp = Local::now().format(HISTORY_TIMESTAMP_FORMAT);
        self.history.push(format!("[{stamp}] {description}"));
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} | Balance: {:.2}", self.number, self.balance)
    }
}
