//! Core trait for balance operations
//!
//! This module defines the three-operation contract that both a bare
//! [`Account`](super::Account) and an identity-bound [`Client`](super::Client)
//! expose, so callers (prompt, load workers, tests) can be written once.

use crate::types::BankError;

/// Trait for operating on an account balance
///
/// Implementations must be safe to call from many threads at once. Mutations
/// are serialized internally; callers hold no locks.
pub trait BankClient: Send + Sync {
    /// Add `amount` to the balance
    fn deposit(&self, amount: i64) -> Result<(), BankError>;

    /// Remove `amount` from the balance if it is covered
    fn withdraw(&self, amount: i64) -> Result<(), BankError>;

    /// Current balance
    fn balance(&self) -> i64;
}

impl<T: BankClient + ?Sized> BankClient for std::sync::Arc<T> {
    fn deposit(&self, amount: i64) -> Result<(), BankError> {
        (**self).deposit(amount)
    }

    fn withdraw(&self, amount: i64) -> Result<(), BankError> {
        (**self).withdraw(amount)
    }

    fn balance(&self) -> i64 {
        (**self).balance()
    }
}
