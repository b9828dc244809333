//! Error types for the bank client
//!
//! This module defines all error types surfaced by account operations and by
//! profile loading. Errors are plain values: the account never panics and never
//! logs, so callers decide how to report them.
//!
//! # Error Categories
//!
//! - **Operation Errors**: Negative amounts, insufficient funds, overflow
//! - **Profile Errors**: Missing file, I/O failures, malformed JSON

use thiserror::Error;

/// Main error type for the bank client
///
/// Every operation error leaves the account balance untouched, so a rejected
/// deposit or withdrawal is equivalent to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Deposit or withdrawal requested with a negative amount
    #[error("operation with negative amount {amount}")]
    NegativeAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Withdrawal larger than the current balance
    #[error("balance {balance} is less than withdrawal amount {requested}")]
    InsufficientFunds {
        /// Balance at the moment of the check
        balance: i64,
        /// Requested withdrawal amount
        requested: i64,
    },

    /// Deposit would push the balance past `i64::MAX`
    #[error("deposit of {amount} would overflow balance {balance}")]
    Overflow {
        /// Balance at the moment of the check
        balance: i64,
        /// Requested deposit amount
        amount: i64,
    },

    /// Profile file not found at the specified path
    #[error("profile not found: {path}")]
    ProfileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the profile
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Profile contents are not a valid person record
    #[error("profile parse error: {message}")]
    ProfileParse {
        /// Description of the parse error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for BankError {
    fn from(error: serde_json::Error) -> Self {
        BankError::ProfileParse {
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create a NegativeAmount error
    pub fn negative_amount(amount: i64) -> Self {
        BankError::NegativeAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: i64, requested: i64) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }

    /// Create an Overflow error
    pub fn overflow(balance: i64, amount: i64) -> Self {
        BankError::Overflow { balance, amount }
    }

    /// Create a ProfileNotFound error
    pub fn profile_not_found(path: &str) -> Self {
        BankError::ProfileNotFound {
            path: path.to_string(),
        }
    }
}
