//! Account balance management
//!
//! This module provides the `Account` struct: a single integer balance guarded
//! by a reader/writer lock.
//!
//! # Design
//!
//! - `deposit` and `withdraw` take the write lock; the check and the mutation in
//!   `withdraw` happen inside one critical section.
//! - `balance` takes the read lock, so concurrent balance queries do not block
//!   each other.
//! - The lock is `parking_lot::RwLock`, which is task-fair (writers are not
//!   starved by a stream of readers) and has no poisoning, so none of the
//!   operations can panic.
//!
//! Rejected operations never touch the balance and nothing here logs.

use super::traits::BankClient;
use crate::types::BankError;
use parking_lot::RwLock;

/// Thread-safe account balance
///
/// Shared between tasks with `Arc<Account>`.
#[derive(Debug, Default)]
pub struct Account {
    /// Current balance; every read and write goes through this lock
    balance: RwLock<i64>,
}

impl Account {
    /// Create an account holding `initial` funds
    pub fn new(initial: i64) -> Self {
        Account {
            balance: RwLock::new(initial),
        }
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// - `NegativeAmount` if `amount < 0`
    /// - `Overflow` if the new balance would exceed `i64::MAX`
    ///
    /// In both cases the balance is unchanged.
    pub fn deposit(&self, amount: i64) -> Result<(), BankError> {
        if amount < 0 {
            return Err(BankError::negative_amount(amount));
        }

        let mut balance = self.balance.write();
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| BankError::overflow(*balance, amount))?;
        *balance = updated;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// A zero amount always succeeds and leaves the balance as it was.
    ///
    /// # Errors
    ///
    /// - `NegativeAmount` if `amount < 0`
    /// - `InsufficientFunds` if the balance is smaller than `amount`
    ///
    /// In both cases the balance is unchanged.
    pub fn withdraw(&self, amount: i64) -> Result<(), BankError> {
        if amount < 0 {
            return Err(BankError::negative_amount(amount));
        }

        let mut balance = self.balance.write();
        if *balance < amount {
            return Err(BankError::insufficient_funds(*balance, amount));
        }
        *balance -= amount;

        Ok(())
    }

    /// Current balance
    pub fn balance(&self) -> i64 {
        *self.balance.read()
    }
}

impl BankClient for Account {
    fn deposit(&self, amount: i64) -> Result<(), BankError> {
        Account::deposit(self, amount)
    }

    fn withdraw(&self, amount: i64) -> Result<(), BankError> {
        Account::withdraw(self, amount)
    }

    fn balance(&self) -> i64 {
        Account::balance(self)
    }
}
