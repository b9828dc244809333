//! Background load generation
//!
//! Stress-tests an account with concurrent random deposits and withdrawals.
//! Cancellation is driven by a token the caller owns.

pub mod config;
pub mod generator;

pub use config::LoadConfig;
pub use generator::{rand_in_range, LoadGenerator, LoadReport, WorkerKind};
