//! The persisted JSON document shape.
//!
//! ```json
//! { "records": [ { "name": "...", "phones": ["..."], "birthday": "DD.MM.YYYY" | null } ] }
//! ```
//!
//! The document types carry plain strings. Turning them back into records goes
//! through the field constructors, so a bad phone or birthday surfaces as a
//! validation error rather than a format error.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::BookResult;
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Top-level persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    /// Records in book order; this order is restored on load.
    pub records: Vec<RecordDocument>,
}

/// One persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDocument {
    pub name: String,

    /// Always written, possibly empty.
    pub phones: Vec<String>,

    /// Written as `null` when absent; a missing key reads as `null`.
    #[serde(default)]
    pub birthday: Option<String>,
}

impl BookDocument {
    /// Build a document from records in iteration order.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        Self {
            records: records.into_iter().map(RecordDocument::from).collect(),
        }
    }

    /// Rebuild every record, failing on the first invalid field.
    pub fn into_records(self) -> BookResult<Vec<Record>> {
        self.records
            .into_iter()
            .map(RecordDocument::into_record)
            .collect()
    }
}

impl RecordDocument {
    /// Rebuild a record, validating the birthday and every phone.
    pub fn into_record(self) -> BookResult<Record> {
        let name = Name::new(self.name);
        let mut record = match self.birthday {
            Some(birthday) => Record::with_birthday(name, Birthday::new(birthday)?),
            None => Record::new(name),
        };

        for phone in self.phones {
            record.add_phone(Phone::new(phone)?);
        }

        Ok(record)
    }
}

impl From<&Record> for RecordDocument {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name_value().to_string(),
            phones: record.phones().iter().map(|p| p.value().to_string()).collect(),
            birthday: record.birthday_value().map(str::to_string),
        }
    }
}
