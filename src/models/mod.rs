//! Data models for the contact book.
//!
//! A [`Record`] is a single contact assembled from validated domain fields.

pub mod record;

pub use record::Record;
