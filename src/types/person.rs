//! Identity profile of an account holder

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a person
pub type ClientId = Uuid;

/// Account holder's personal information
///
/// Loaded from a JSON profile with the keys `firstname`, `lastname` and
/// `email`. The identifier is never read from the profile; it is assigned
/// when the record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Identifier assigned on load
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: ClientId,

    #[serde(rename = "firstname", default)]
    pub first_name: String,

    #[serde(rename = "lastname", default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,
}

impl Person {
    /// Create a person with a fresh random identifier
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Person {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// First six characters of the identifier, used in display output
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(6).collect()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [id:{}...]",
            self.first_name,
            self.last_name,
            self.short_id()
        )
    }
}
