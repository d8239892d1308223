//! Paginated iteration over an address book.

use crate::models::Record;
use std::iter::FusedIterator;
use std::slice::Chunks;

/// Lazy iterator over consecutive batches of records in book order.
///
/// Each item is a `Vec` of up to `batch_size` records; only the last batch
/// may be shorter. An empty book yields no batches.
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Batches<'a> {
    pub(crate) fn new(records: &'a [Record], batch_size: usize) -> Self {
        Self {
            chunks: records.chunks(batch_size.max(1)),
        }
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|chunk| chunk.iter().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
