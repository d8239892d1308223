//! The common field capability and its dynamic form.

use super::errors::FieldKindError;
use super::{Birthday, Name, Phone};
use std::fmt;

/// Tag identifying which kind of field a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl FieldKind {
    /// Get display name for the field kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named scalar holding a string value.
///
/// Implemented by every concrete field type. The stored value of a field always
/// satisfies that field's own validation rules.
pub trait Field {
    /// Which kind of field this is.
    const KIND: FieldKind;

    /// The stored string value.
    fn value(&self) -> &str;
}

/// A field whose concrete kind is only known at runtime.
///
/// Callers holding untyped input can wrap it here and convert into the concrete
/// type an operation requires; a kind mismatch fails with [`FieldKindError`].
///
/// # Example
///
/// ```
/// use contact_book::domain::{AnyField, Name, Phone};
///
/// let field = AnyField::from(Name::new("Alice"));
/// assert!(Phone::try_from(field).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyField {
    Name(Name),
    Phone(Phone),
    Birthday(Birthday),
}

impl AnyField {
    /// The kind of the wrapped field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name(_) => FieldKind::Name,
            Self::Phone(_) => FieldKind::Phone,
            Self::Birthday(_) => FieldKind::Birthday,
        }
    }

    /// The wrapped field's string value.
    pub fn value(&self) -> &str {
        match self {
            Self::Name(name) => name.value(),
            Self::Phone(phone) => phone.value(),
            Self::Birthday(birthday) => birthday.value(),
        }
    }
}

impl From<Name> for AnyField {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

impl From<Phone> for AnyField {
    fn from(phone: Phone) -> Self {
        Self::Phone(phone)
    }
}

impl From<Birthday> for AnyField {
    fn from(birthday: Birthday) -> Self {
        Self::Birthday(birthday)
    }
}

impl TryFrom<AnyField> for Name {
    type Error = FieldKindError;

    fn try_from(field: AnyField) -> Result<Self, Self::Error> {
        match field {
            AnyField::Name(name) => Ok(name),
            other => Err(FieldKindError {
                expected: FieldKind::Name,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<AnyField> for Phone {
    type Error = FieldKindError;

    fn try_from(field: AnyField) -> Result<Self, Self::Error> {
        match field {
            AnyField::Phone(phone) => Ok(phone),
            other => Err(FieldKindError {
                expected: FieldKind::Phone,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<AnyField> for Birthday {
    type Error = FieldKindError;

    fn try_from(field: AnyField) -> Result<Self, Self::Error> {
        match field {
            AnyField::Birthday(birthday) => Ok(birthday),
            other => Err(FieldKindError {
                expected: FieldKind::Birthday,
                found: other.kind(),
            }),
        }
    }
}
