//! Registration form handling.
//!
//! The form collects a name, surname and phone number. Each field can be
//! checked on its own as the visitor types ([`validate_field`]); submitting
//! checks all three and reports every failing field at once.

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use shopco_core::{NameError, PersonName, PhoneError, PhoneNumber};

use crate::models::Customer;

/// A registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Surname,
    Phone,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Surname, Self::Phone];

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Surname => "Surname",
            Self::Phone => "Phone Number",
        }
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub surname: String,
    pub phone: String,
}

impl RegistrationForm {
    /// Create a form from its three fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            phone: phone.into(),
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::Phone => &self.phone,
        }
    }

    /// Validate every field and build the customer record.
    ///
    /// # Errors
    ///
    /// Returns the errors for every invalid field.
    pub fn validate(&self) -> Result<Customer, RegistrationErrors> {
        match (
            PersonName::parse(&self.name),
            PersonName::parse(&self.surname),
            PhoneNumber::parse(&self.phone),
        ) {
            (Ok(name), Ok(surname), Ok(phone)) => Ok(Customer {
                name,
                surname,
                phone,
                registered_at: Utc::now(),
            }),
            (name, surname, phone) => Err(RegistrationErrors {
                name: name.err(),
                surname: surname.err(),
                phone: phone.err(),
            }),
        }
    }

    /// Returns true if the form can be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| validate_field(field, self.value(field)).is_none())
    }
}

/// Validate a single field value, returning the message to show under it.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    match field {
        Field::Name | Field::Surname => PersonName::parse(value)
            .err()
            .map(|err| name_message(field, &err)),
        Field::Phone => PhoneNumber::parse(value).err().map(|err| phone_message(&err)),
    }
}

fn name_message(field: Field, err: &NameError) -> String {
    format!("{} {err}", field.label())
}

fn phone_message(err: &PhoneError) -> String {
    match err {
        PhoneError::TooShort { .. } => format!("Phone number {err}"),
        PhoneError::InvalidFormat => "Invalid phone number format".to_string(),
    }
}

/// Field errors from a rejected registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.messages().join("; "))]
pub struct RegistrationErrors {
    pub name: Option<NameError>,
    pub surname: Option<NameError>,
    pub phone: Option<PhoneError>,
}

impl RegistrationErrors {
    /// Message for one field, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => self.name.as_ref().map(|err| name_message(field, err)),
            Field::Surname => self.surname.as_ref().map(|err| name_message(field, err)),
            Field::Phone => self.phone.as_ref().map(phone_message),
        }
    }

    /// Messages for every failing field, in form order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.message(field))
            .collect()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.phone.is_none()
    }
}
