//! Parapet analysis engine.
//!
//! Coordinates the per-file scan pipeline over a mobile application source
//! tree: file discovery, content-fingerprint caching, rule dispatch with
//! bounded parallelism and per-rule failure isolation, and heuristic
//! suppression of development-context findings.

pub mod cache;
pub mod engine;
pub mod heuristics;
pub mod parsers;
pub mod rules;
pub mod walker;

pub use cache::ContentCache;
pub use engine::{RuleEngine, ScanResult};
pub use rules::{Rule, RuleContext, RuleGroup};
pub use walker::{FileWalker, WalkedFiles};
