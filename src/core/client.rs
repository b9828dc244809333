//! Identity-bound account access
//!
//! A `Client` associates a person with an account and forwards the balance
//! operations to it. Several clients may share one `Arc<Account>`.

use super::account::Account;
use super::traits::BankClient;
use crate::types::{BankError, Person};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// An account holder's handle on their account
#[derive(Debug, Clone)]
pub struct Client {
    /// Identifier of this client handle
    id: Uuid,

    /// Account holder
    owner: Person,

    /// Shared balance
    account: Arc<Account>,
}

impl Client {
    /// Create a client with a fresh zero-balance account
    pub fn new(owner: Person) -> Self {
        Self::with_account(owner, Arc::new(Account::default()))
    }

    /// Create a client on top of an existing account
    pub fn with_account(owner: Person, account: Arc<Account>) -> Self {
        Client {
            id: Uuid::new_v4(),
            owner,
            account,
        }
    }

    /// Identifier of this handle, distinct from the owner's id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The account holder
    pub fn owner(&self) -> &Person {
        &self.owner
    }

    /// The underlying account, for sharing with other clients
    pub fn account(&self) -> Arc<Account> {
        Arc::clone(&self.account)
    }
}

impl BankClient for Client {
    fn deposit(&self, amount: i64) -> Result<(), BankError> {
        self.account.deposit(amount)
    }

    fn withdraw(&self, amount: i64) -> Result<(), BankError> {
        self.account.withdraw(amount)
    }

    fn balance(&self) -> i64 {
        self.account.balance()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.owner, f)
    }
}
