//! AstParser trait — the contract the engine consumes parsers through.

use std::path::Path;

use parapet_core::errors::ParseError;

/// Trait for turning source text into an AST.
///
/// The engine never inspects the tree; it only records whether parsing
/// succeeded and hands the result to rules through the context.
pub trait AstParser: Send + Sync {
    /// Parse source code for the file at `path`.
    fn parse(&self, source: &str, path: &Path) -> Result<tree_sitter::Tree, ParseError>;
}
