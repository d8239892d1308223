//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from: names,
//! phone numbers and birthdays. Phone and birthday values are checked at
//! construction and on every update, so an invalid value can never be stored.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::{FieldKindError, ValidationError};
pub use field::{AnyField, Field, FieldKind};
pub use name::Name;
pub use phone::Phone;
