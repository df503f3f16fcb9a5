//! Customer domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopco_core::{PersonName, PhoneNumber};

/// A registered visitor.
///
/// Produced by a valid registration form. Nothing is verified against a
/// backend; the record only unlocks the storefront for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// First name.
    pub name: PersonName,
    /// Surname.
    pub surname: PersonName,
    /// Contact phone number.
    pub phone: PhoneNumber,
    /// When the registration form was submitted.
    pub registered_at: DateTime<Utc>,
}

impl Customer {
    /// Name and surname joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
