//! Bank Client Library
//! # Overview
//!
//! This library provides a concurrency-safe account balance together with the
//! tooling used to exercise it: profile loading, a line-oriented prompt and a
//! randomized background load generator.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Shared data types (BankError, Person)
//! - [`core`] - Balance components:
//!   - [`core::account`] - Lock-guarded balance with deposit/withdraw/balance
//!   - [`core::client`] - Identity-bound handle forwarding to an account
//!   - [`core::traits`] - The `BankClient` contract
//! - [`io`] - JSON profile loading
//! - [`load`] - Background depositor/withdrawer tasks with cancellation
//! - [`cli`] - CLI arguments, interactive prompt and session wiring
//! - [`observability`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Deposit**: Add a non-negative amount to the balance
//! - **Withdraw**: Remove a non-negative amount if the balance covers it
//! - **Balance**: Read the current balance
//!
//! Rejected operations return a [`BankError`] and leave the balance unchanged.

pub mod cli;
pub mod core;
pub mod io;
pub mod load;
pub mod observability;
pub mod types;

pub use core::{Account, BankClient, Client};
pub use load::{LoadConfig, LoadGenerator, LoadReport};
pub use types::{BankError, ClientId, Person};
