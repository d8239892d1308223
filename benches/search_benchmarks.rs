//! Performance benchmarks for search and pagination.
//!
//! These benchmarks measure the address book at personal-contact-list sizes:
//! - Substring search hitting many / no records
//! - Paginated iteration with different batch sizes
//! - JSON serialization of a full book

use contact_book::{AddressBook, Birthday, Name, Phone, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` records with two phones each and a birthday on every third.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let name = Name::new(format!("Contact {:05}", i));
        let mut record = if i % 3 == 0 {
            let birthday = format!("{:02}.{:02}.19{:02}", i % 28 + 1, i % 12 + 1, i % 100);
            Record::with_birthday(name, Birthday::new(birthday).unwrap())
        } else {
            Record::new(name)
        };
        record.add_phone(Phone::new(format!("+380{:09}", i)).unwrap());
        record.add_phone(Phone::new(format!("+1{:09}", i * 7)).unwrap());
        book.add_record(record);
    }
    book
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_contacts");

    for size in [100usize, 1_000, 5_000] {
        let book = create_test_book(size);

        group.bench_with_input(BenchmarkId::new("broad", size), &book, |b, book| {
            b.iter(|| book.search_contacts(black_box("12")));
        });

        group.bench_with_input(BenchmarkId::new("miss", size), &book, |b, book| {
            b.iter(|| book.search_contacts(black_box("no such contact")));
        });
    }

    group.finish();
}

fn bench_pagination(c: &mut Criterion) {
    let book = create_test_book(1_000);
    let mut group = c.benchmark_group("iterator");

    for batch_size in [1usize, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter(|| book.iterator(black_box(batch_size)).map(|batch| batch.len()).sum::<usize>());
            },
        );
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let book = create_test_book(1_000);
    c.bench_function("to_json_1000", |b| {
        b.iter(|| book.to_json().unwrap());
    });
}

criterion_group!(benches, bench_search, bench_pagination, bench_serialize);
criterion_main!(benches);
