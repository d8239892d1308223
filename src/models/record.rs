//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};

/// A contact: one name, any number of phones and an optional birthday.
///
/// The name is fixed at construction. Phones keep their insertion order and
/// may contain duplicates; edits and removals act on the first equal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a new record that starts out with a birthday.
    pub fn with_birthday(name: Name, birthday: Birthday) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: Some(birthday),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The name's string value, which is also this record's key in a book.
    pub fn name_value(&self) -> &str {
        self.name.value()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The birthday's literal `DD.MM.YYYY` string, if one is set.
    pub fn birthday_value(&self) -> Option<&str> {
        self.birthday.as_ref().map(Birthday::value)
    }

    /// Append a phone to the end of the list.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &Phone) -> BookResult<Phone> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Duplicates are not collapsed: if `new` is already present it will appear twice.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is not on the record.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> BookResult<Phone> {
        let index = self.position_of(old)?;
        Ok(std::mem::replace(&mut self.phones[index], new))
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Remove the birthday, returning the old one.
    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// Returns `None` if no birthday is set or the stored day and month never
    /// form a calendar date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; `0` when it is today.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday.as_ref()?.next_occurrence(today)?;
        Some((next - today).num_days())
    }

    fn position_of(&self, phone: &Phone) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.value().to_string()))
    }
}
