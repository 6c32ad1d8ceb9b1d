//! Event payload types.

use std::path::PathBuf;

use crate::types::Severity;

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    /// Project root for project scans; `None` for explicit file lists.
    pub root: Option<PathBuf>,
    pub file_count: usize,
}

/// Payload for `on_scan_progress`.
///
/// `processed` starts at 1 and reaches `total` exactly once per run; values
/// are monotonically non-decreasing even though completion order across
/// files is arbitrary.
#[derive(Debug, Clone)]
pub struct ScanProgressEvent {
    pub processed: usize,
    pub total: usize,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub findings: usize,
    pub scanned_files: usize,
    pub skipped_files: usize,
    pub cached_files: usize,
    pub duration_ms: u64,
}

/// Payload for `on_scan_error`. Non-fatal by construction.
#[derive(Debug, Clone)]
pub struct ScanErrorEvent {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Payload for `on_finding_detected`, emitted before debug-context
/// filtering.
#[derive(Debug, Clone)]
pub struct FindingDetectedEvent {
    pub rule_id: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub severity: Severity,
}

/// Payload for `on_finding_suppressed`.
#[derive(Debug, Clone)]
pub struct FindingSuppressedEvent {
    pub rule_id: String,
    pub file: PathBuf,
    pub reason: String,
}

/// Payload for `on_cache_pruned`.
#[derive(Debug, Clone)]
pub struct CachePrunedEvent {
    pub removed: usize,
}
