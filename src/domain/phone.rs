//! Phone value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// `+`, a 1-3 digit country code, then exactly nine subscriber digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{1,3}[0-9]{9}$").expect("phone pattern is valid"));

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time and on
/// every subsequent [`Phone::set`].
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Phone};
///
/// let phone = Phone::new("+380123456789").unwrap();
/// assert_eq!(phone.value(), "+380123456789");
/// assert!(Phone::new("0123456789").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must start with `+`
    /// - Followed by 1 to 3 digits of country code
    /// - Followed by exactly 9 further digits
    /// - Nothing else, no separators or whitespace
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check a candidate string against the phone format.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_RE.is_match(phone)
    }

    /// Replace the stored number.
    ///
    /// The old value is kept untouched if the new one is rejected.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(phone)?;
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    const KIND: FieldKind = FieldKind::Phone;

    fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Phone {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
