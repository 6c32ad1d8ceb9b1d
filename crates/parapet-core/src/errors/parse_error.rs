//! Parser errors.

use std::path::PathBuf;

/// Errors that can occur while parsing a source file.
///
/// A parse failure only means the rule context carries no AST for that file;
/// rules that need one contribute nothing and the scan continues.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unsupported language: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitter { path: PathBuf, message: String },
}
