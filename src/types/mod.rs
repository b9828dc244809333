//! Types module
//!
//! Contains data structures shared across the crate:
//! - `error`: Error types for account operations and profile loading
//! - `person`: Account holder identity

pub mod error;
pub mod person;

pub use error::BankError;
pub use person::{ClientId, Person};
