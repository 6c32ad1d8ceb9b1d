//! Project file discovery.
//!
//! The walker buckets discovered files by analysis kind and applies the
//! default exclusions plus any caller-supplied globs. Traversal output is
//! stable-sorted by path so downstream ordering and progress reporting are
//! reproducible for a given file-system snapshot.

pub mod ignores;

use std::fs;
use std::path::{Path, PathBuf};

use ignores::IgnorePatterns;

/// Extensions routed to the source bucket.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

/// The analysis kind of a discovered file, fixed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Source,
    Config,
    Manifest,
    PropertyList,
}

impl FileKind {
    /// Classify a path by extension; `None` for files Parapet does not scan.
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?;
        if SOURCE_EXTENSIONS.contains(&ext) {
            return Some(FileKind::Source);
        }
        match ext {
            "json" => Some(FileKind::Config),
            "xml" => Some(FileKind::Manifest),
            "plist" => Some(FileKind::PropertyList),
            _ => None,
        }
    }
}

/// Discovered project files, bucketed by analysis kind.
#[derive(Debug, Clone, Default)]
pub struct WalkedFiles {
    pub source_files: Vec<PathBuf>,
    pub config_files: Vec<PathBuf>,
    pub manifest_files: Vec<PathBuf>,
    pub property_list_files: Vec<PathBuf>,
}

impl WalkedFiles {
    /// All buckets concatenated in bucket order.
    pub fn all(&self) -> Vec<PathBuf> {
        let mut all = Vec::with_capacity(self.len());
        all.extend_from_slice(&self.source_files);
        all.extend_from_slice(&self.config_files);
        all.extend_from_slice(&self.manifest_files);
        all.extend_from_slice(&self.property_list_files);
        all
    }

    pub fn len(&self) -> usize {
        self.source_files.len()
            + self.config_files.len()
            + self.manifest_files.len()
            + self.property_list_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Recursive project walker.
pub struct FileWalker {
    root: PathBuf,
    ignores: IgnorePatterns,
}

impl FileWalker {
    /// Create a walker for `root` with caller exclusions unioned onto the
    /// defaults.
    pub fn new(root: impl Into<PathBuf>, extra_excludes: &[String]) -> Self {
        let root = root.into();
        // Absolute output paths; fall back to the given root if it cannot
        // be canonicalized (e.g. it does not exist).
        let root = fs::canonicalize(&root).unwrap_or(root);
        let ignores = IgnorePatterns::new(&root, extra_excludes);
        Self { root, ignores }
    }

    /// Walk the project tree. A missing or empty root yields empty buckets
    /// without failing.
    pub fn walk(&self) -> WalkedFiles {
        let mut files = WalkedFiles::default();
        if !self.root.is_dir() {
            tracing::debug!(root = %self.root.display(), "walk root missing, returning empty");
            return files;
        }

        self.walk_dir(&self.root, &mut files);

        files.source_files.sort();
        files.config_files.sort();
        files.manifest_files.sort();
        files.property_list_files.sort();
        files
    }

    fn walk_dir(&self, dir: &Path, files: &mut WalkedFiles) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "unreadable directory skipped");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);

            if path.is_dir() {
                if !self.ignores.is_ignored(relative, true) {
                    self.walk_dir(&path, files);
                }
            } else if path.is_file() && !self.ignores.is_ignored(relative, false) {
                match FileKind::from_path(&path) {
                    Some(FileKind::Source) => files.source_files.push(path),
                    Some(FileKind::Config) => files.config_files.push(path),
                    Some(FileKind::Manifest) => files.manifest_files.push(path),
                    Some(FileKind::PropertyList) => files.property_list_files.push(path),
                    None => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_kind_mapping_is_fixed() {
        assert_eq!(
            FileKind::from_path(Path::new("src/App.tsx")),
            Some(FileKind::Source)
        );
        assert_eq!(
            FileKind::from_path(Path::new("app.json")),
            Some(FileKind::Config)
        );
        assert_eq!(
            FileKind::from_path(Path::new("AndroidManifest.xml")),
            Some(FileKind::Manifest)
        );
        assert_eq!(
            FileKind::from_path(Path::new("Info.plist")),
            Some(FileKind::PropertyList)
        );
        assert_eq!(FileKind::from_path(Path::new("README.md")), None);
        assert_eq!(FileKind::from_path(Path::new("no_extension")), None);
    }
}
