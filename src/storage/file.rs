//! Reading and writing book documents on disk.

use super::document::BookDocument;
use crate::error::{BookError, BookResult};
use crate::observability::{trace_storage, StorageAction};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `document` as the sole content of `path`, truncating any existing file.
pub fn write_document(path: &Path, document: &BookDocument) -> BookResult<()> {
    trace_storage(
        StorageAction::Save,
        path,
        |_| document.records.len(),
        || write_inner(path, document),
    )
}

fn write_inner(path: &Path, document: &BookDocument) -> BookResult<()> {
    let io_err = |source| BookError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| classify(path, e))?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Read and parse the document at `path`.
///
/// The file handle is released on every return path, including parse failures.
pub fn read_document(path: &Path) -> BookResult<BookDocument> {
    trace_storage(
        StorageAction::Load,
        path,
        |document: &BookDocument| document.records.len(),
        || read_inner(path),
    )
}

fn read_inner(path: &Path) -> BookResult<BookDocument> {
    let file = File::open(path).map_err(|source| BookError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| classify(path, e))
}

/// Split serde_json failures into I/O failures and malformed content.
fn classify(path: &Path, err: serde_json::Error) -> BookError {
    if err.is_io() {
        BookError::Io {
            path: path.to_path_buf(),
            source: err.into(),
        }
    } else {
        BookError::Format(err)
    }
}
