//! Default exclusion patterns for mobile project trees.
//!
//! These prevent the scanner from descending into dependency, build, and
//! VCS directories, and keep test artifacts out of scan input. Caller
//! patterns are unioned with the defaults, never substituted for them.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Directories that are always excluded.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Dependencies
    "node_modules",
    ".pnpm",
    ".yarn",
    "bower_components",
    "Pods",
    "Carthage",
    "vendor",
    // Build output
    "build",
    "dist",
    "out",
    "output",
    ".build",
    "DerivedData",
    ".gradle",
    // Bundler/tooling caches
    ".cache",
    ".expo",
    ".expo-shared",
    ".next",
    "coverage",
    ".nyc_output",
    // Version control
    ".git",
    ".svn",
    ".hg",
];

/// Test-artifact naming conventions, always excluded from scan input.
pub const DEFAULT_TEST_PATTERNS: &[&str] = &[
    "*.test.*",
    "*.spec.*",
    "__tests__",
    "__mocks__",
    "__snapshots__",
];

/// Parapet's own on-disk state.
pub const CACHE_FILE_PATTERN: &str = ".parapet-cache.json";

/// Compiled exclusion matcher for a walk.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Build the matcher from defaults plus caller-supplied globs.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in DEFAULT_TEST_PATTERNS {
            let _ = builder.add_line(None, pattern);
        }
        // Hidden directories (covers VCS and editor state not named above).
        let _ = builder.add_line(None, ".*/");
        let _ = builder.add_line(None, CACHE_FILE_PATTERN);

        for pattern in extra_patterns {
            let _ = builder.add_line(None, pattern);
        }

        Self {
            gitignore: builder.build().unwrap_or_else(|_| {
                GitignoreBuilder::new(root).build().expect("empty gitignore")
            }),
        }
    }

    /// Check whether a root-relative path is excluded.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
