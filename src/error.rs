//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{FieldKindError, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with records and address books.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone or birthday value failed format validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A field of the wrong kind was supplied
    #[error(transparent)]
    WrongFieldKind(#[from] FieldKindError),

    /// The phone to remove or edit is not on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// No record is stored under the given name
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// The book file could not be opened, read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted document is not valid JSON or does not have the expected shape
    #[error("Malformed address book document: {0}")]
    Format(#[source] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
