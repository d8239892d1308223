//! Substring matching over record fields.
//!
//! Matching is case-sensitive and unanchored. An empty query is a substring of
//! every string, so it matches every record through its name.

use crate::domain::Field;
use crate::models::Record;

/// Type of searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchableField {
    /// Contact name
    Name,
    /// One of the contact's phones
    Phone,
    /// Contact birthday, in its literal `DD.MM.YYYY` form
    Birthday,
}

impl SearchableField {
    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        }
    }
}

/// A single field of a record that contains the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Field where the match was found
    pub field: SearchableField,

    /// The full value of the matching field
    pub value: String,

    /// Byte offset of the first occurrence of the query in `value`
    pub offset: usize,
}

/// A record together with every field that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub record: &'a Record,

    /// Matches in field order: name, phones in list order, birthday.
    pub matches: Vec<FieldMatch>,
}

/// Collect every field of `record` that contains `query`.
pub fn match_fields(record: &Record, query: &str) -> Vec<FieldMatch> {
    let mut matches = Vec::new();

    let mut check = |field: SearchableField, value: &str| {
        if let Some(offset) = value.find(query) {
            matches.push(FieldMatch {
                field,
                value: value.to_string(),
                offset,
            });
        }
    };

    check(SearchableField::Name, record.name_value());
    for phone in record.phones() {
        check(SearchableField::Phone, phone.value());
    }
    if let Some(birthday) = record.birthday_value() {
        check(SearchableField::Birthday, birthday);
    }

    matches
}

/// Whether any field of `record` contains `query`.
///
/// Short-circuits on the first hit.
pub fn record_matches(record: &Record, query: &str) -> bool {
    record.name_value().contains(query)
        || record.phones().iter().any(|p| p.value().contains(query))
        || record
            .birthday_value()
            .is_some_and(|birthday| birthday.contains(query))
}
