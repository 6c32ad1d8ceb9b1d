//! Content cache errors.

use std::path::PathBuf;

/// Errors that can occur while loading or persisting the content cache.
///
/// The cache is best-effort: callers swallow these and degrade to an
/// uncached scan rather than failing.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("IO error on cache file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed cache file {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}
