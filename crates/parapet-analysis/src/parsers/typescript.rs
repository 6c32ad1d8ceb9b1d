//! Tree-sitter parser for TypeScript and JavaScript sources.

use std::path::Path;

use parapet_core::errors::ParseError;

use super::language::Language;
use super::traits::AstParser;

/// Default parser implementation over the tree-sitter grammars.
///
/// A `tree_sitter::Parser` is not `Sync`, so one is created per parse; for
/// the file sizes this tool targets, grammar setup is negligible next to
/// the parse itself.
#[derive(Debug, Default)]
pub struct TreeSitterParser;

impl TreeSitterParser {
    pub fn new() -> Self {
        Self
    }
}

impl AstParser for TreeSitterParser {
    fn parse(&self, source: &str, path: &Path) -> Result<tree_sitter::Tree, ParseError> {
        let ext = path.extension().and_then(|e| e.to_str());
        let language = Language::from_extension(ext).ok_or_else(|| ParseError::UnsupportedLanguage {
            extension: ext.unwrap_or("").to_string(),
        })?;

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language.ts_language_for_ext(ext))
            .map_err(|e| ParseError::TreeSitter {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeSitter {
                path: path.to_path_buf(),
                message: "parser produced no tree".to_string(),
            })
    }
}
