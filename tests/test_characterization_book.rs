//! Characterization tests for AddressBook
//!
//! These tests pin down behavior that callers depend on even where it is
//! surprising: the shape of default iteration, overwrite ordering and the
//! empty query.

mod fixtures;
use fixtures::*;

use contact_book::{AddressBook, Birthday, Phone, Record};

/// Test: default iteration yields one-element lists, not bare records
#[test]
fn test_default_iteration_shape() {
    let book = sample_book();

    let batches: Vec<Vec<&Record>> = (&book).into_iter().collect();
    assert_eq!(batches.len(), book.len());
    assert!(batches.iter().all(|batch| batch.len() == 1));

    let explicit: Vec<Vec<&Record>> = book.iterator(1).collect();
    assert_eq!(batches, explicit);
}

/// Test: overwriting keeps the original slot in iteration order
#[test]
fn test_overwrite_keeps_position() {
    let mut book = sample_book();
    let before: Vec<String> = book.names().map(str::to_string).collect();

    book.add_record(sample_record("Lesya Ukrainka", &[], None));

    let after: Vec<String> = book.names().map(str::to_string).collect();
    assert_eq!(before, after);
    assert!(book.get("Lesya Ukrainka").unwrap().phones().is_empty());
}

/// Test: the empty query is a substring of every name
#[test]
fn test_empty_query_matches_everything() {
    let book = sample_book();
    assert_eq!(book.search_contacts("").len(), book.len());
}

/// Test: search results follow book order, not relevance
#[test]
fn test_search_results_in_book_order() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("b-1", &[], None));
    book.add_record(sample_record("a-1", &[], None));
    book.add_record(sample_record("c-1", &[], None));

    assert_eq!(
        names_of(&book.search_contacts("-1")),
        vec!["b-1", "a-1", "c-1"]
    );
}

/// Test: every stored record sits under its own name
#[test]
fn test_names_match_keys() {
    assert_names_match_keys(&sample_book());
}

fn assert_names_match_keys(book: &AddressBook) {
    for record in book.records() {
        let stored = book
            .get(record.name_value())
            .unwrap_or_else(|| panic!("{} is not stored under its own name", record.name_value()));
        assert_eq!(stored, record);
    }
}

/// Test: editing a stored record never moves it off its key
#[test]
fn test_edits_keep_record_under_its_name() {
    let mut book = sample_book();
    {
        let mut editor = book.edit_record("Ivan Franko").unwrap();
        editor.add_phone(Phone::new("+380671234567").unwrap());
        editor.set_birthday(Birthday::new("28.08.1856").unwrap());
        editor.clear_birthday();
    }
    {
        let mut editor = book.edit_record("Taras Shevchenko").unwrap();
        editor
            .edit_phone(
                &Phone::new("+380123456789").unwrap(),
                Phone::new("+380000000000").unwrap(),
            )
            .unwrap();
        editor
            .remove_phone(&Phone::new("+380987654321").unwrap())
            .unwrap();
    }

    let franko = book.get("Ivan Franko").unwrap();
    assert_eq!(franko.name_value(), "Ivan Franko");
    assert_eq!(franko.phones().len(), 1);
    assert!(franko.birthday().is_none());
    assert_eq!(
        book.get("Taras Shevchenko").unwrap().name_value(),
        "Taras Shevchenko"
    );
    assert_eq!(book.len(), 5);
    assert_names_match_keys(&book);
}

/// Test: replacing and removing records through the book keeps keys consistent
#[test]
fn test_replace_and_remove_keep_names_matching_keys() {
    let mut book = sample_book();

    book.add_record(sample_record("Marko Vovchok", &[], Some("22.12.1833")));
    book.remove_record("Lesya Ukrainka").unwrap();
    book.add_record(sample_record("Bob", &[], None));

    assert!(!book.contains("Lesya Ukrainka"));
    assert!(book.contains("Bob"));
    assert_names_match_keys(&book);

    let reloaded = AddressBook::from_json(&book.to_json().unwrap()).unwrap();
    assert_eq!(reloaded, book);
    assert_names_match_keys(&reloaded);
}

/// Test: an empty book saves as an empty records list and reloads empty
#[test]
fn test_empty_book_json() {
    let book = AddressBook::new();
    let json = book.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({ "records": [] }));
    assert!(AddressBook::from_json(&json).unwrap().is_empty());
}
