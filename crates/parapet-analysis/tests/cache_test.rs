//! Content cache persistence tests.

use std::fs;
use std::path::PathBuf;

use parapet_analysis::cache::{fingerprint, ContentCache, CACHE_FILE_NAME, DEFAULT_MAX_AGE_MS};
use parapet_core::types::{Finding, Severity};
use tempfile::TempDir;

fn finding(path: &str) -> Finding {
    Finding::new(
        "sec-hardcoded-secret",
        "hardcoded secret",
        Severity::Critical,
        path,
    )
    .with_line(3)
    .with_snippet("const token = \"...\";")
}

#[test]
fn save_and_reload_roundtrip() {
    let dir = TempDir::new().expect("create temp dir");
    let file = PathBuf::from("/project/src/a.ts");
    let hash = fingerprint("const a = 1;");

    let mut cache = ContentCache::new(dir.path(), "1.0.0");
    cache.load();
    cache.set(&file, hash.clone(), vec![finding("/project/src/a.ts")]);
    cache.save();

    assert!(dir.path().join(CACHE_FILE_NAME).exists());

    let mut reloaded = ContentCache::new(dir.path(), "1.0.0");
    reloaded.load();
    assert!(reloaded.is_valid(&file, &hash));
    let findings = reloaded.get_findings(&file).expect("cached findings");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule_id, "sec-hardcoded-secret");
    assert_eq!(findings[0].line, Some(3));
}

#[test]
fn reload_under_new_version_invalidates_every_entry() {
    let dir = TempDir::new().expect("create temp dir");
    let file = PathBuf::from("/project/src/a.ts");
    let hash = fingerprint("const a = 1;");

    let mut cache = ContentCache::new(dir.path(), "1.0.0");
    cache.load();
    cache.set(&file, hash.clone(), vec![]);
    cache.save();

    let mut upgraded = ContentCache::new(dir.path(), "2.0.0");
    upgraded.load();
    // Same hash, same path — the version stamp alone invalidates.
    assert!(!upgraded.is_valid(&file, &hash));
}

#[test]
fn malformed_cache_file_resets_to_empty() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join(CACHE_FILE_NAME), "{not json at all").expect("write garbage");

    let mut cache = ContentCache::new(dir.path(), "1.0.0");
    cache.load();
    assert_eq!(cache.stats().entry_count, 0);
}

#[test]
fn missing_cache_file_loads_as_empty() {
    let dir = TempDir::new().expect("create temp dir");
    let mut cache = ContentCache::new(dir.path(), "1.0.0");
    cache.load();
    assert_eq!(cache.stats().entry_count, 0);
}

#[test]
fn save_without_mutation_writes_nothing() {
    let dir = TempDir::new().expect("create temp dir");
    let mut cache = ContentCache::new(dir.path(), "1.0.0");
    cache.load();
    cache.save();
    assert!(!dir.path().join(CACHE_FILE_NAME).exists());
}

#[test]
fn save_while_disabled_writes_nothing() {
    let dir = TempDir::new().expect("create temp dir");
    let mut cache = ContentCache::new(dir.path(), "1.0.0");
    cache.load();
    cache.set(&PathBuf::from("/a"), "h", vec![]);
    cache.disable();
    cache.save();
    assert!(!dir.path().join(CACHE_FILE_NAME).exists());
}

#[test]
fn prune_removes_exactly_the_missing_path() {
    let dir = TempDir::new().expect("create temp dir");
    let mut cache = ContentCache::new(dir.path(), "1.0.0");
    cache.load();
    let a = PathBuf::from("/a");
    let b = PathBuf::from("/b");
    cache.set(&a, "h1", vec![]);
    cache.set(&b, "h2", vec![]);

    let existing = vec![a.clone()];
    let removed = cache.prune(&existing, DEFAULT_MAX_AGE_MS);

    assert_eq!(removed, 1);
    assert_eq!(cache.stats().entry_count, 1);
    assert!(cache.get_findings(&a).is_some());
    assert!(cache.get_findings(&b).is_none());
}

#[test]
fn cache_survives_process_restart_semantics() {
    // Two independent instances over the same directory model two runs of
    // the tool.
    let dir = TempDir::new().expect("create temp dir");
    let file = PathBuf::from("/project/src/a.ts");
    let content = "export const a = 1;";

    let mut first_run = ContentCache::new(dir.path(), "1.0.0");
    first_run.load();
    first_run.set(&file, fingerprint(content), vec![finding("/project/src/a.ts")]);
    first_run.save();

    let mut second_run = ContentCache::new(dir.path(), "1.0.0");
    second_run.load();
    assert!(second_run.is_valid(&file, &fingerprint(content)));
    // A one-byte change must miss.
    assert!(!second_run.is_valid(&file, &fingerprint("export const a = 2;")));
}
