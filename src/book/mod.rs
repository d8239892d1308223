//! The address book and its paginated iterator.

pub mod address_book;
pub mod batches;
pub mod editor;

pub use address_book::AddressBook;
pub use batches::Batches;
pub use editor::RecordEditor;
