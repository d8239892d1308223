//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and address books.

use contact_book::{AddressBook, Birthday, Name, Phone, Record};

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let name = Name::new(name);
    let mut record = match birthday {
        Some(b) => Record::with_birthday(name, Birthday::new(b).expect("valid fixture birthday")),
        None => Record::new(name),
    };
    for phone in phones {
        record.add_phone(Phone::new(*phone).expect("valid fixture phone"));
    }
    record
}

/// A small book with a mix of phones and birthdays, in a known order.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "Taras Shevchenko",
        &["+380123456789", "+380987654321"],
        Some("09.03.1814"),
    ));
    book.add_record(sample_record("Lesya Ukrainka", &["+380501112233"], None));
    book.add_record(sample_record("Ivan Franko", &[], Some("27.08.1856")));
    book.add_record(sample_record("Marko Vovchok", &["+11111111111"], None));
    book.add_record(sample_record("Olha Kobylianska", &[], None));
    book
}

/// Names of `records`, in order.
#[allow(dead_code)]
pub fn names_of(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name_value().to_string()).collect()
}
