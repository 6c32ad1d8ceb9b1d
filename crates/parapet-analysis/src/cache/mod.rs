//! Content-fingerprint result cache.
//!
//! The cache is an optimization layer only: disabling it never changes the
//! findings a fresh scan produces, only whether rules re-execute. State
//! persists as a single JSON file at the project root; the whole file is
//! loaded up front, mutated in memory, and written back once at the end of
//! a run. That rewrite-everything contract is a known scaling limit for the
//! project sizes this tool targets.

pub mod hasher;

pub use hasher::fingerprint;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use parapet_core::errors::CacheError;
use parapet_core::types::collections::BTreeMap;
use parapet_core::types::Finding;

/// On-disk cache file name, relative to the project root.
pub const CACHE_FILE_NAME: &str = ".parapet-cache.json";

/// Cache retention window for `prune`: 7 days.
pub const DEFAULT_MAX_AGE_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// One cached analysis result, keyed by file path in [`CacheData`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub hash: String,
    pub findings: Vec<Finding>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Tool version that produced the findings.
    pub version: String,
}

/// The persisted cache document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheData {
    pub files: BTreeMap<PathBuf, CacheEntry>,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entry_count: usize,
}

/// Content cache over a project root.
///
/// While disabled, every query is a guaranteed miss and every mutation is a
/// no-op; no operation raises an error either way.
pub struct ContentCache {
    path: PathBuf,
    version: String,
    data: CacheData,
    dirty: bool,
    enabled: bool,
}

impl ContentCache {
    /// Create a cache rooted at `project_dir`, stamped with `version`.
    /// Call [`load`](Self::load) to pick up persisted state.
    pub fn new(project_dir: &Path, version: impl Into<String>) -> Self {
        Self {
            path: project_dir.join(CACHE_FILE_NAME),
            version: version.into(),
            data: CacheData::default(),
            dirty: false,
            enabled: true,
        }
    }

    /// Read persisted state. A missing or malformed file silently resets to
    /// an empty cache; this never fails the caller.
    pub fn load(&mut self) {
        self.data = match self.read_data() {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(error = %e, "cache reset to empty");
                CacheData {
                    created_at: now_ms(),
                    ..Default::default()
                }
            }
        };
        self.dirty = false;
    }

    fn read_data(&self) -> Result<CacheData, CacheError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CacheError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|e| CacheError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Persist the cache if enabled and mutated since the last save. Write
    /// failures are swallowed; the cache is best-effort and never
    /// scan-fatal.
    pub fn save(&mut self) {
        if !self.enabled || !self.dirty {
            return;
        }
        self.data.updated_at = now_ms();
        if self.data.created_at == 0 {
            self.data.created_at = self.data.updated_at;
        }
        match serde_json::to_string(&self.data) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), error = %e, "cache save failed");
                    return;
                }
                self.dirty = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cache serialization failed");
            }
        }
    }

    /// True iff an entry exists for `path` whose stored hash equals `hash`
    /// and whose stored version equals the running version.
    pub fn is_valid(&self, path: &Path, hash: &str) -> bool {
        if !self.enabled {
            return false;
        }
        self.data
            .files
            .get(path)
            .is_some_and(|entry| entry.hash == hash && entry.version == self.version)
    }

    /// Cached findings for `path`, if present.
    pub fn get_findings(&self, path: &Path) -> Option<Vec<Finding>> {
        if !self.enabled {
            return None;
        }
        self.data.files.get(path).map(|entry| entry.findings.clone())
    }

    /// Upsert an entry stamped with the current time and running version.
    pub fn set(&mut self, path: &Path, hash: impl Into<String>, findings: Vec<Finding>) {
        if !self.enabled {
            return;
        }
        let entry = CacheEntry {
            hash: hash.into(),
            findings,
            timestamp: now_ms(),
            version: self.version.clone(),
        };
        let _ = self.data.files.insert(path.to_path_buf(), entry);
        self.dirty = true;
    }

    /// Drop the entry for `path`, if any.
    pub fn remove(&mut self, path: &Path) {
        if !self.enabled {
            return;
        }
        if self.data.files.remove(path).is_some() {
            self.dirty = true;
        }
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        if !self.enabled {
            return;
        }
        if !self.data.files.is_empty() {
            self.data.files.clear();
            self.dirty = true;
        }
    }

    /// Remove entries whose path is absent from `existing_paths` or whose
    /// timestamp is older than `max_age_ms`. Returns the removed count.
    pub fn prune<'a, I>(&mut self, existing_paths: I, max_age_ms: u64) -> usize
    where
        I: IntoIterator<Item = &'a PathBuf>,
    {
        if !self.enabled {
            return 0;
        }
        let existing: std::collections::HashSet<&PathBuf> = existing_paths.into_iter().collect();
        let cutoff = now_ms().saturating_sub(max_age_ms);
        let before = self.data.files.len();
        self.data
            .files
            .retain(|path, entry| existing.contains(path) && entry.timestamp >= cutoff);
        let removed = before - self.data.files.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.data.files.len(),
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
