//! The address book: records keyed by name, kept in insertion order.

use super::batches::Batches;
use super::editor::RecordEditor;
use crate::config::Config;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::search::{match_fields, record_matches, SearchHit};
use crate::storage::{read_document, write_document, BookDocument};
use std::collections::HashMap;
use std::path::Path;

/// An ordered collection of records keyed by their name.
///
/// Every stored record's name equals its key. Adding a record under a name that
/// is already present replaces the old record in place, so the original
/// position in iteration order is kept.
///
/// The book does no internal locking; callers sharing one across threads must
/// serialize access themselves.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Name, Phone, Record};
///
/// let mut record = Record::new(Name::new("Alice"));
/// record.add_phone(Phone::new("+380123456789").unwrap());
///
/// let mut book = AddressBook::new();
/// book.add_record(record);
///
/// assert_eq!(book.search_contacts("123").len(), 1);
/// assert_eq!(book.iterator(2).count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new address book from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> BookResult<Self> {
        let document = read_document(path.as_ref())?;
        Self::from_document(document)
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let existing = self.index.get(record.name_value()).copied();
        match existing {
            Some(position) => Some(std::mem::replace(&mut self.records[position], record)),
            None => {
                self.index
                    .insert(record.name_value().to_string(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has that name.
    pub fn remove_record(&mut self, name: &str) -> BookResult<Record> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        let record = self.records.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Ok(record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Edit the phones or birthday of the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has that name.
    pub fn edit_record(&mut self, name: &str) -> BookResult<RecordEditor<'_>> {
        let position = *self
            .index
            .get(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        Ok(RecordEditor::new(&mut self.records[position]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(Record::name_value)
    }

    /// Records in book order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// Iterate over the book in pages of the configured batch size.
    pub fn pages(&self, config: &Config) -> Batches<'_> {
        self.iterator(config.batch_size)
    }

    /// Iterate over the book in batches of up to `batch_size` records.
    ///
    /// Each call starts from the beginning. A `batch_size` of zero is treated
    /// as one.
    pub fn iterator(&self, batch_size: usize) -> Batches<'_> {
        Batches::new(&self.records, batch_size)
    }

    /// All records whose name, any phone, or birthday string contains `query`.
    ///
    /// Matching is case-sensitive. Results are in book order and the list is
    /// empty, never absent, when nothing matches.
    pub fn search_contacts(&self, query: &str) -> Vec<&Record> {
        let results: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| record_matches(record, query))
            .collect();

        tracing::trace!(query = %query, result_count = results.len(), "Search completed");
        results
    }

    /// Like [`search_contacts`](Self::search_contacts), but reports which
    /// fields of each record matched.
    pub fn search_with_matches(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.records
            .iter()
            .filter_map(|record| {
                let matches = match_fields(record, query);
                (!matches.is_empty()).then_some(SearchHit { record, matches })
            })
            .collect()
    }

    /// Write every record to `path` as a JSON document, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Io` if the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> BookResult<()> {
        write_document(path.as_ref(), &self.to_document())
    }

    /// Replace the contents of this book with the records stored at `path`.
    ///
    /// Loading is all-or-nothing: the new contents are built separately and
    /// swapped in only once every record has been read and validated. On any
    /// error the book is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - `BookError::Io` if the file cannot be opened or read
    /// - `BookError::Format` if it is not a valid book document
    /// - `BookError::Validation` if any phone or birthday is malformed
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        let loaded = Self::from_file(path)?;
        *self = loaded;
        Ok(())
    }

    /// Load the book stored at the configured `book_file`.
    pub fn load_configured(config: &Config) -> BookResult<Self> {
        Self::from_file(&config.book_file)
    }

    /// Save the book to the configured `book_file`.
    pub fn save_configured(&self, config: &Config) -> BookResult<()> {
        self.save_to_file(&config.book_file)
    }

    /// Serialize the book to the same JSON document written by [`save_to_file`](Self::save_to_file).
    pub fn to_json(&self) -> BookResult<String> {
        serde_json::to_string_pretty(&self.to_document()).map_err(BookError::Format)
    }

    /// Build a book from a JSON document string.
    pub fn from_json(json: &str) -> BookResult<Self> {
        let document: BookDocument = serde_json::from_str(json).map_err(BookError::Format)?;
        Self::from_document(document)
    }

    fn to_document(&self) -> BookDocument {
        BookDocument::from_records(&self.records)
    }

    fn from_document(document: BookDocument) -> BookResult<Self> {
        let mut book = Self::new();
        for record in document.into_records()? {
            book.add_record(record);
        }
        Ok(book)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Vec<&'a Record>;
    type IntoIter = Batches<'a>;

    /// Batches of one record each, matching `iterator(1)`.
    fn into_iter(self) -> Self::IntoIter {
        self.iterator(1)
    }
}
