//! Tracing for book saves and loads.

use crate::error::{BookError, BookResult};
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Which way a book document moves between memory and disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Save,
    Load,
}

impl fmt::Display for StorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageAction::Save => "save",
            StorageAction::Load => "load",
        })
    }
}

/// Run `op` against `path` and report how it went.
///
/// Success is logged at debug level with the number of records `count`
/// reports for the output; failure is logged at warn level with the error.
/// The result of `op` is returned untouched.
pub fn trace_storage<T>(
    action: StorageAction,
    path: &Path,
    count: impl FnOnce(&T) -> usize,
    op: impl FnOnce() -> BookResult<T>,
) -> BookResult<T> {
    let started = Instant::now();
    let result = op();
    let elapsed_ms = started.elapsed().as_millis();

    match &result {
        Ok(value) => tracing::debug!(
            path = %path.display(),
            records = count(value),
            elapsed_ms,
            "Address book {} succeeded",
            action
        ),
        Err(err) => log_failure(action, path, err, elapsed_ms),
    }
    result
}

fn log_failure(action: StorageAction, path: &Path, err: &BookError, elapsed_ms: u128) {
    let kind = match err {
        BookError::Io { .. } => "io",
        BookError::Format(_) => "format",
        _ => "content",
    };
    tracing::warn!(
        path = %path.display(),
        kind,
        elapsed_ms,
        error = %err,
        "Address book {} failed",
        action
    );
}
