//! ScanEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing scan lifecycle events.
///
/// All methods have no-op default implementations, so handlers only need to
/// override the events they care about. `Send + Sync` is required because
/// events are emitted from worker threads.
pub trait ScanEventHandler: Send + Sync {
    // ---- Scan lifecycle ----
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_scan_progress(&self, _event: &ScanProgressEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
    fn on_scan_error(&self, _event: &ScanErrorEvent) {}

    // ---- Findings ----
    fn on_finding_detected(&self, _event: &FindingDetectedEvent) {}
    fn on_finding_suppressed(&self, _event: &FindingSuppressedEvent) {}

    // ---- Cache ----
    fn on_cache_pruned(&self, _event: &CachePrunedEvent) {}
}
