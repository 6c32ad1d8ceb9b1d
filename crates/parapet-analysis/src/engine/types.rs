//! Engine result types.

use parapet_core::types::Finding;

/// The terminal aggregate of one scan invocation. Purely derived, never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Findings concatenated in original input-file order.
    pub findings: Vec<Finding>,
    /// Total number of files the run considered.
    pub scanned_files: usize,
    /// Files that could not be read; surfaced only when > 0.
    pub skipped_files: Option<usize>,
    /// Files answered from the content cache; surfaced only when > 0.
    pub cached_files: Option<usize>,
}
