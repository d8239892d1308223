//! Domain validation errors.

use super::field::FieldKind;
use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number does not match `+<1-3 digit code><9 digits>`.
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY`.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The kind of field that rejected the value.
    pub fn field_kind(&self) -> FieldKind {
        match self {
            Self::InvalidPhone(_) => FieldKind::Phone,
            Self::InvalidBirthday(_) => FieldKind::Birthday,
        }
    }

    /// The rejected value.
    pub fn rejected_value(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(birthday) => write!(f, "Invalid birthday: {}", birthday),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A field of one kind was supplied where another kind was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKindError {
    /// The kind the operation accepts.
    pub expected: FieldKind,

    /// The kind that was actually supplied.
    pub found: FieldKind,
}

impl fmt::Display for FieldKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected a {} field, got a {} field", self.expected, self.found)
    }
}

impl std::error::Error for FieldKindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: 123");

        let err = ValidationError::InvalidBirthday("1990-01-01".to_string());
        assert_eq!(err.to_string(), "Invalid birthday: 1990-01-01");
    }

    #[test]
    fn test_validation_error_identifies_field_and_value() {
        let err = ValidationError::InvalidBirthday("1.1.1990".to_string());
        assert_eq!(err.field_kind(), FieldKind::Birthday);
        assert_eq!(err.rejected_value(), "1.1.1990");
    }

    #[test]
    fn test_field_kind_error_display() {
        let err = FieldKindError {
            expected: FieldKind::Phone,
            found: FieldKind::Name,
        };
        assert_eq!(err.to_string(), "Expected a phone field, got a name field");
    }
}
