//! In-place editing of a stored record.

use crate::domain::{Birthday, Phone};
use crate::error::BookResult;
use crate::models::Record;
use std::ops::Deref;

/// Mutable handle to a record held by an [`AddressBook`](super::AddressBook).
///
/// Only phones and the birthday can change. The record itself cannot be
/// replaced, so its name always stays equal to the key it is stored under.
/// Reads go through `Deref<Target = Record>`.
#[derive(Debug)]
pub struct RecordEditor<'a> {
    record: &'a mut Record,
}

impl<'a> RecordEditor<'a> {
    pub(crate) fn new(record: &'a mut Record) -> Self {
        Self { record }
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.record.add_phone(phone);
    }

    pub fn remove_phone(&mut self, phone: &Phone) -> BookResult<Phone> {
        self.record.remove_phone(phone)
    }

    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> BookResult<Phone> {
        self.record.edit_phone(old, new)
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.record.set_birthday(birthday);
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.record.clear_birthday()
    }
}

impl Deref for RecordEditor<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        self.record
    }
}
