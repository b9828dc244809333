//! I/O module
//!
//! Handles reading account holder profiles.
//!
//! # Components
//!
//! - `profile` - JSON profile loading

pub mod profile;

pub use profile::{load_person, read_person};
