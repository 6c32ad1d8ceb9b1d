//! Scanner errors.

use std::path::PathBuf;

/// Errors that can occur while reading files for a scan.
///
/// None of these abort a run: the engine records the file as skipped and
/// continues with the remaining files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}
