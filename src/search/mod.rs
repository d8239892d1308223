//! Substring search across contact records.
//!
//! A record matches a query when the query occurs in its name, in any of its
//! phones, or in its birthday string.

pub mod matcher;

pub use matcher::{match_fields, record_matches, FieldMatch, SearchHit, SearchableField};
