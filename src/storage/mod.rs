//! Persistence of address books as JSON documents.
//!
//! [`document`] defines the serde shape; [`file`] moves it to and from disk.

pub mod document;
pub mod file;

pub use document::{BookDocument, RecordDocument};
pub use file::{read_document, write_document};
