//! Contact details collected by the registration form.
//!
//! Both types follow the same rules as the sign-up screen: a minimum length
//! check first, then a character-set check.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PersonName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Fewer than [`PersonName::MIN_LENGTH`] characters.
    #[error("must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// Contains something other than letters and whitespace.
    #[error("can only contain letters")]
    InvalidCharacters,
}

/// A first name or surname.
///
/// ## Constraints
///
/// - At least 2 characters
/// - ASCII letters and whitespace only
///
/// ## Examples
///
/// ```
/// use shopco_core::PersonName;
///
/// assert!(PersonName::parse("Ada").is_ok());
/// assert!(PersonName::parse("Mary Ann").is_ok());
///
/// assert!(PersonName::parse("A").is_err());     // too short
/// assert!(PersonName::parse("R2D2").is_err());  // digits
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Minimum number of characters.
    pub const MIN_LENGTH: usize = 2;

    /// Parse a `PersonName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is shorter than two characters or
    /// contains anything besides ASCII letters and whitespace.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        if s.chars().count() < Self::MIN_LENGTH {
            return Err(NameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        {
            return Err(NameError::InvalidCharacters);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PersonName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// Fewer than [`PhoneNumber::MIN_LENGTH`] characters.
    #[error("must be at least {min} digits")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// Contains a character outside the allowed set, or a `+` that is not leading.
    #[error("invalid phone number format")]
    InvalidFormat,
}

/// A phone number as typed by the customer.
///
/// ## Constraints
///
/// - At least 10 characters, counting separators
/// - An optional leading `+`, then digits, whitespace, `-`, `(` and `)` only
///
/// ## Examples
///
/// ```
/// use shopco_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+1 (555) 123-4567").is_ok());
/// assert!(PhoneNumber::parse("5551234567").is_ok());
///
/// assert!(PhoneNumber::parse("555-1234").is_err());      // too short
/// assert!(PhoneNumber::parse("555 123 4567 x9").is_err()); // letter
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum number of characters.
    pub const MIN_LENGTH: usize = 10;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is shorter than ten characters or does
    /// not match the allowed format.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.chars().count() < Self::MIN_LENGTH {
            return Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        let body = s.strip_prefix('+').unwrap_or(s);
        let valid = !body.is_empty()
            && body
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'));
        if !valid {
            return Err(PhoneError::InvalidFormat);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only the digits of the number, without separators.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(PersonName::parse("Al").is_ok());
        assert!(PersonName::parse("Jean Luc").is_ok());
        assert!(PersonName::parse("ALLCAPS").is_ok());
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(
            PersonName::parse("J"),
            Err(NameError::TooShort { min: 2 })
        );
        assert_eq!(PersonName::parse(""), Err(NameError::TooShort { min: 2 }));
    }

    #[test]
    fn test_name_length_checked_before_characters() {
        assert_eq!(PersonName::parse("1"), Err(NameError::TooShort { min: 2 }));
    }

    #[test]
    fn test_name_invalid_characters() {
        assert_eq!(
            PersonName::parse("O'Brien"),
            Err(NameError::InvalidCharacters)
        );
        assert_eq!(
            PersonName::parse("Jose-Maria"),
            Err(NameError::InvalidCharacters)
        );
        assert_eq!(PersonName::parse("Zoë"), Err(NameError::InvalidCharacters));
    }

    #[test]
    fn test_phone_valid() {
        assert!(PhoneNumber::parse("+1 (555) 123-4567").is_ok());
        assert!(PhoneNumber::parse("0123456789").is_ok());
        assert!(PhoneNumber::parse("(555) 123 4567").is_ok());
    }

    #[test]
    fn test_phone_too_short() {
        assert_eq!(
            PhoneNumber::parse("123456789"),
            Err(PhoneError::TooShort { min: 10 })
        );
    }

    #[test]
    fn test_phone_plus_only_leading() {
        assert_eq!(
            PhoneNumber::parse("555+1234567"),
            Err(PhoneError::InvalidFormat)
        );
        assert_eq!(
            PhoneNumber::parse("++15551234567"),
            Err(PhoneError::InvalidFormat)
        );
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert_eq!(
            PhoneNumber::parse("555-CALL-NOW"),
            Err(PhoneError::InvalidFormat)
        );
    }

    #[test]
    fn test_phone_digits() {
        let phone = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
        assert_eq!(phone.digits(), "15551234567");
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<PersonName>(r#""Grace""#).is_ok());
        assert!(serde_json::from_str::<PersonName>(r#""G""#).is_err());
        assert!(serde_json::from_str::<PhoneNumber>(r#""12""#).is_err());
    }
}
