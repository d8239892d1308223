//! Contact Book - a file-backed personal address book.
//!
//! This library stores contacts with validated phone numbers and birthdays,
//! supports editing, substring search and paginated iteration, and persists
//! the whole book to a JSON document.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` type, one contact
//! - **book**: The `AddressBook` collection and its batch iterator
//! - **search**: Substring matching across record fields
//! - **storage**: JSON document shape and file I/O
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Tracing setup and storage tracing
//!
//! The library never prints. Errors are returned to the caller and diagnostic
//! events go through `tracing`.

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod search;
pub mod storage;

// Re-export commonly used types
pub use book::{AddressBook, Batches, RecordEditor};
pub use config::Config;
pub use domain::{AnyField, Birthday, Field, FieldKind, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use search::{SearchHit, SearchableField};
