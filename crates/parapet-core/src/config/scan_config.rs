//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the scan engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum number of files analyzed concurrently. Default: 10.
    pub concurrency: Option<usize>,
    /// Exclusion globs, unioned with the built-in defaults.
    pub exclude: Vec<String>,
    /// Rule ids that must never run.
    pub ignored_rules: Vec<String>,
    /// Enable the content cache. Default: true.
    pub cache: Option<bool>,
    /// Maximum file size in bytes read for analysis. Default: 5 MiB.
    pub max_file_size: Option<u64>,
}

impl ScanConfig {
    /// Returns the effective concurrency bound, defaulting to 10 and
    /// clamped to at least 1. An invalid value is never an error.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.unwrap_or(10).max(1)
    }

    /// Returns whether the content cache is enabled, defaulting to true.
    pub fn effective_cache(&self) -> bool {
        self.cache.unwrap_or(true)
    }

    /// Returns the effective maximum file size, defaulting to 5 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(5 * 1024 * 1024)
    }
}
