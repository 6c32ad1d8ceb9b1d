//! Rule engine — the scan scheduler.
//!
//! Drives the per-file pipeline (cache check → context build → rule
//! dispatch → debug-context filtering → cache write) across a bounded
//! parallel task set and aggregates results in input-file order.

pub mod types;

pub use types::ScanResult;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;

use parapet_core::config::ScanConfig;
use parapet_core::errors::ScanError;
use parapet_core::events::{
    CachePrunedEvent, EventDispatcher, FindingDetectedEvent, FindingSuppressedEvent,
    ScanCompleteEvent, ScanErrorEvent, ScanEventHandler, ScanProgressEvent, ScanStartedEvent,
};
use parapet_core::types::collections::FxHashSet;
use parapet_core::types::Finding;

use crate::cache::{fingerprint, CacheStats, ContentCache};
use crate::heuristics::is_in_debug_context;
use crate::parsers::{AstParser, TreeSitterParser};
use crate::rules::{Rule, RuleContext, RuleGroup};
use crate::walker::FileWalker;

/// Default number of files analyzed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// The scan scheduler.
///
/// Holds registered rules, ignore-lists, exclusion globs, the concurrency
/// bound, and the optional content cache. Diagnostics flow through the
/// event handlers registered at construction time; there is no ambient
/// verbosity flag.
pub struct RuleEngine {
    groups: Vec<RuleGroup>,
    ignored_rules: FxHashSet<String>,
    excluded_paths: Vec<String>,
    exclude_set: GlobSet,
    concurrency: usize,
    max_file_size: u64,
    cache: Option<Mutex<ContentCache>>,
    parser: Arc<dyn AstParser>,
    dispatcher: EventDispatcher,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Create an engine with the default tree-sitter parser, no rules, and
    /// caching off.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            ignored_rules: FxHashSet::default(),
            excluded_paths: Vec::new(),
            exclude_set: GlobSet::empty(),
            concurrency: DEFAULT_CONCURRENCY,
            max_file_size: ScanConfig::default().effective_max_file_size(),
            cache: None,
            parser: Arc::new(TreeSitterParser::new()),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Create an engine that delegates source parsing to `parser`.
    pub fn with_parser(parser: Arc<dyn AstParser>) -> Self {
        Self {
            parser,
            ..Self::new()
        }
    }

    /// Register a handler for scan lifecycle events.
    pub fn add_event_handler(&mut self, handler: Arc<dyn ScanEventHandler>) {
        self.dispatcher.register(handler);
    }

    // ---- Configuration ----

    /// Register a rule group. Grouping is metadata; scheduling is per file.
    pub fn register_rule_group(&mut self, group: RuleGroup) {
        self.groups.push(group);
    }

    /// Replace the set of rule ids that never run.
    pub fn set_ignored_rules<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_rules = ids.into_iter().map(Into::into).collect();
    }

    /// Replace the caller-supplied exclusion globs. Invalid patterns are
    /// dropped with a diagnostic rather than failing configuration.
    pub fn set_excluded_paths(&mut self, globs: &[String]) {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();
        for pattern in globs {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    kept.push(pattern.clone());
                }
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "invalid exclusion glob dropped");
                }
            }
        }
        self.exclude_set = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "exclusion globs unavailable");
            GlobSet::empty()
        });
        self.excluded_paths = kept;
    }

    /// Set the concurrency bound, clamped to at least 1.
    pub fn set_concurrency(&mut self, concurrency: usize) {
        self.concurrency = concurrency.max(1);
    }

    /// Apply a scan configuration: concurrency, exclusions, ignored rules,
    /// and the file-size ceiling.
    pub fn apply_config(&mut self, config: &ScanConfig) {
        self.set_concurrency(config.effective_concurrency());
        self.set_excluded_paths(&config.exclude);
        self.set_ignored_rules(config.ignored_rules.iter().cloned());
        self.max_file_size = config.effective_max_file_size();
    }

    /// Flattened rule list across all groups minus ignored ids, preserving
    /// registration order.
    pub fn get_all_rules(&self) -> Vec<Arc<dyn Rule>> {
        self.groups
            .iter()
            .flat_map(|group| group.rules.iter())
            .filter(|rule| !self.ignored_rules.contains(rule.id()))
            .cloned()
            .collect()
    }

    // ---- Cache wiring ----

    /// Attach a content cache rooted at `project_dir`, stamped with
    /// `version`, and load its persisted state.
    pub fn enable_cache(&mut self, project_dir: &Path, version: &str) {
        let mut cache = ContentCache::new(project_dir, version);
        cache.load();
        self.cache = Some(Mutex::new(cache));
    }

    /// Detach the content cache; subsequent runs re-execute every rule.
    pub fn disable_cache(&mut self) {
        self.cache = None;
    }

    /// Drop all cache entries and persist the empty state.
    pub fn clear_cache(&mut self) {
        if let Some(cache) = &self.cache {
            let mut guard = lock_cache(cache);
            guard.clear();
            guard.save();
        }
    }

    /// Remove cache entries for files that no longer exist or are older
    /// than `max_age_ms`. Returns the removed count.
    pub fn prune_cache(&mut self, existing_paths: &[PathBuf], max_age_ms: u64) -> usize {
        let Some(cache) = &self.cache else {
            return 0;
        };
        let removed = lock_cache(cache).prune(existing_paths, max_age_ms);
        if removed > 0 {
            self.dispatcher.emit_cache_pruned(&CachePrunedEvent { removed });
        }
        removed
    }

    /// Cache statistics, if a cache is attached.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| lock_cache(cache).stats())
    }

    // ---- Scanning ----

    /// Walk `root` and run all applicable rules over the discovered files.
    pub fn run_rules_on_project(&self, root: &Path) -> ScanResult {
        let walked = FileWalker::new(root, &self.excluded_paths).walk();
        self.run_pipeline(walked.all(), Some(root.to_path_buf()))
    }

    /// Run all applicable rules over an explicit file list. Paths matching
    /// the exclusion globs are dropped up front.
    pub fn run_rules_on_files(&self, paths: &[PathBuf]) -> ScanResult {
        let files: Vec<PathBuf> = paths
            .iter()
            .filter(|path| !self.is_excluded(path))
            .cloned()
            .collect();
        self.run_pipeline(files, None)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        !self.exclude_set.is_empty() && self.exclude_set.is_match(path)
    }

    fn run_pipeline(&self, files: Vec<PathBuf>, root: Option<PathBuf>) -> ScanResult {
        let start = Instant::now();
        let total = files.len();
        self.dispatcher.emit_scan_started(&ScanStartedEvent {
            root,
            file_count: total,
        });

        let rules = self.get_all_rules();
        // Progress is emitted under this lock so observed values are
        // monotonically non-decreasing even though completion order across
        // workers is arbitrary.
        let processed = Mutex::new(0usize);
        let skipped = AtomicUsize::new(0);
        let cached = AtomicUsize::new(0);

        let per_file: Vec<Vec<Finding>> = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency)
            .build()
        {
            Ok(pool) => pool.install(|| {
                files
                    .par_iter()
                    .map(|path| self.process_file(path, &rules, total, &processed, &skipped, &cached))
                    .collect()
            }),
            Err(e) => {
                tracing::warn!(error = %e, "worker pool unavailable, scanning sequentially");
                files
                    .iter()
                    .map(|path| self.process_file(path, &rules, total, &processed, &skipped, &cached))
                    .collect()
            }
        };

        // Persist exactly once, after all tasks join, so there is never a
        // partially written cache file.
        if let Some(cache) = &self.cache {
            lock_cache(cache).save();
        }

        let findings: Vec<Finding> = per_file.into_iter().flatten().collect();
        let skipped = skipped.into_inner();
        let cached = cached.into_inner();

        self.dispatcher.emit_scan_complete(&ScanCompleteEvent {
            findings: findings.len(),
            scanned_files: total,
            skipped_files: skipped,
            cached_files: cached,
            duration_ms: start.elapsed().as_millis() as u64,
        });

        ScanResult {
            findings,
            scanned_files: total,
            skipped_files: (skipped > 0).then_some(skipped),
            cached_files: (cached > 0).then_some(cached),
        }
    }

    /// One per-file task: analyze, then report progress regardless of
    /// outcome so callers get monotonic progress.
    fn process_file(
        &self,
        path: &Path,
        rules: &[Arc<dyn Rule>],
        total: usize,
        processed: &Mutex<usize>,
        skipped: &AtomicUsize,
        cached: &AtomicUsize,
    ) -> Vec<Finding> {
        let findings = self.analyze_file(path, rules, skipped, cached);
        let mut guard = match processed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard += 1;
        self.dispatcher.emit_scan_progress(&ScanProgressEvent {
            processed: *guard,
            total,
        });
        findings
    }

    fn analyze_file(
        &self,
        path: &Path,
        rules: &[Arc<dyn Rule>],
        skipped: &AtomicUsize,
        cached: &AtomicUsize,
    ) -> Vec<Finding> {
        if let Ok(metadata) = fs::metadata(path) {
            if metadata.len() > self.max_file_size {
                let error = ScanError::FileTooLarge {
                    path: path.to_path_buf(),
                    size: metadata.len(),
                    max: self.max_file_size,
                };
                return self.skip_file(path, &error, skipped);
            }
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                let error = ScanError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                return self.skip_file(path, &error, skipped);
            }
        };

        let hash = self.cache.as_ref().map(|_| fingerprint(&content));
        if let (Some(cache), Some(hash)) = (&self.cache, hash.as_deref()) {
            let guard = lock_cache(cache);
            if guard.is_valid(path, hash) {
                if let Some(findings) = guard.get_findings(path) {
                    cached.fetch_add(1, Ordering::SeqCst);
                    return findings;
                }
            }
        }

        let ctx = RuleContext::build(path, content, self.parser.as_ref());

        let mut findings = Vec::new();
        for rule in rules.iter().filter(|rule| rule_applies(rule.as_ref(), path)) {
            match rule.apply(&ctx) {
                Ok(batch) => {
                    for finding in &batch {
                        self.dispatcher.emit_finding_detected(&FindingDetectedEvent {
                            rule_id: finding.rule_id.clone(),
                            file: finding.file_path.clone(),
                            line: finding.line,
                            severity: finding.severity,
                        });
                    }
                    findings.extend(batch);
                }
                Err(e) => {
                    // Failure isolation is per rule invocation.
                    tracing::warn!(rule = rule.id(), path = %path.display(), error = %e,
                        "rule failed, findings discarded");
                }
            }
        }

        // Hard filter: this tool reports only production-relevant issues.
        findings.retain(|finding| {
            let snippet = finding.snippet.as_deref().unwrap_or("");
            if is_in_debug_context(&ctx.file_content, snippet, path) {
                self.dispatcher
                    .emit_finding_suppressed(&FindingSuppressedEvent {
                        rule_id: finding.rule_id.clone(),
                        file: path.to_path_buf(),
                        reason: "debug or development context".to_string(),
                    });
                false
            } else {
                true
            }
        });

        if let (Some(cache), Some(hash)) = (&self.cache, hash) {
            lock_cache(cache).set(path, hash, findings.clone());
        }

        findings
    }

    /// Record a file the run could not analyze. A single degraded file
    /// never aborts the run.
    fn skip_file(&self, path: &Path, error: &ScanError, skipped: &AtomicUsize) -> Vec<Finding> {
        skipped.fetch_add(1, Ordering::SeqCst);
        self.dispatcher.emit_scan_error(&ScanErrorEvent {
            path: Some(path.to_path_buf()),
            message: error.to_string(),
        });
        tracing::debug!(path = %path.display(), error = %error, "file skipped");
        Vec::new()
    }
}

/// Select rules whose file-type suffixes match the path.
fn rule_applies(rule: &dyn Rule, path: &Path) -> bool {
    let path = path.to_string_lossy();
    rule.file_types().iter().any(|suffix| path.ends_with(suffix))
}

/// Cache mutations must stay serialized even if a worker panicked while
/// holding the lock.
fn lock_cache(cache: &Mutex<ContentCache>) -> MutexGuard<'_, ContentCache> {
    match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parapet_core::errors::DetectionError;
    use parapet_core::types::Severity;
    use crate::rules::RuleCategory;

    struct DummyRule {
        id: &'static str,
    }

    impl Rule for DummyRule {
        fn id(&self) -> &str {
            self.id
        }
        fn description(&self) -> &str {
            "dummy"
        }
        fn severity(&self) -> Severity {
            Severity::Low
        }
        fn file_types(&self) -> &[&str] {
            &[".ts", ".tsx"]
        }
        fn apply(&self, _ctx: &RuleContext) -> Result<Vec<Finding>, DetectionError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn all_rules_preserve_registration_order_minus_ignored() {
        let mut engine = RuleEngine::new();
        engine.register_rule_group(RuleGroup::new(
            RuleCategory::Code,
            vec![Arc::new(DummyRule { id: "a" }), Arc::new(DummyRule { id: "b" })],
        ));
        engine.register_rule_group(RuleGroup::new(
            RuleCategory::Network,
            vec![Arc::new(DummyRule { id: "c" })],
        ));
        engine.set_ignored_rules(["b"]);

        let rules = engine.get_all_rules();
        let ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn file_type_suffix_selects_applicable_rules() {
        let rule = DummyRule { id: "a" };
        assert!(rule_applies(&rule, Path::new("/src/App.tsx")));
        assert!(rule_applies(&rule, Path::new("/src/index.ts")));
        assert!(!rule_applies(&rule, Path::new("/src/app.json")));
    }

    #[test]
    fn concurrency_is_clamped() {
        let mut engine = RuleEngine::new();
        engine.set_concurrency(0);
        assert_eq!(engine.concurrency, 1);
        engine.set_concurrency(4);
        assert_eq!(engine.concurrency, 4);
    }

    #[test]
    fn apply_config_wires_engine_settings() {
        let mut engine = RuleEngine::new();
        let config = ScanConfig {
            concurrency: Some(0),
            exclude: vec!["**/generated/**".to_string()],
            ignored_rules: vec!["net-insecure-http".to_string()],
            cache: None,
            max_file_size: Some(64),
        };
        engine.apply_config(&config);

        assert_eq!(engine.concurrency, 1);
        assert_eq!(engine.max_file_size, 64);
        assert!(engine.ignored_rules.contains("net-insecure-http"));
        assert!(engine.is_excluded(Path::new("/app/generated/api.ts")));
        assert!(!engine.is_excluded(Path::new("/app/src/api.ts")));
    }
}
