//! Core business logic module
//!
//! This module contains the balance components:
//! - `traits` - The deposit/withdraw/balance contract
//! - `account` - Lock-guarded account balance
//! - `client` - Identity-bound handle forwarding to an account

pub mod account;
pub mod client;
pub mod traits;

pub use account::Account;
pub use client::Client;
pub use traits::BankClient;
