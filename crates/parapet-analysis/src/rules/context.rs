//! Per-file rule context.

use std::path::{Path, PathBuf};

use crate::parsers::AstParser;
use crate::walker::FileKind;

/// The per-file, per-scan payload rules operate on.
///
/// Built fresh for every non-cached scan and never shared across files.
/// Exactly one of `ast`/`config`/`xml_content`/`plist_content` is
/// populated, selected by file extension; a parse failure leaves the
/// corresponding slot empty rather than failing the file.
pub struct RuleContext {
    pub file_path: PathBuf,
    pub file_content: String,
    pub ast: Option<tree_sitter::Tree>,
    pub config: Option<serde_json::Value>,
    pub xml_content: Option<String>,
    pub plist_content: Option<String>,
}

impl RuleContext {
    /// Build a context for `path`, delegating source parsing to the parser
    /// collaborator.
    pub fn build(path: &Path, content: String, parser: &dyn AstParser) -> Self {
        let mut ctx = Self {
            file_path: path.to_path_buf(),
            file_content: content,
            ast: None,
            config: None,
            xml_content: None,
            plist_content: None,
        };

        match FileKind::from_path(path) {
            Some(FileKind::Source) => {
                ctx.ast = match parser.parse(&ctx.file_content, path) {
                    Ok(tree) => Some(tree),
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "no AST for file");
                        None
                    }
                };
            }
            Some(FileKind::Config) => {
                ctx.config = match serde_json::from_str(&ctx.file_content) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "malformed config JSON");
                        None
                    }
                };
            }
            Some(FileKind::Manifest) => {
                ctx.xml_content = Some(ctx.file_content.clone());
            }
            Some(FileKind::PropertyList) => {
                ctx.plist_content = Some(ctx.file_content.clone());
            }
            None => {}
        }

        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::TreeSitterParser;

    #[test]
    fn source_file_gets_an_ast() {
        let parser = TreeSitterParser::new();
        let ctx = RuleContext::build(Path::new("a.ts"), "const x = 1;".to_string(), &parser);
        assert!(ctx.ast.is_some());
        assert!(ctx.config.is_none());
        assert!(ctx.xml_content.is_none());
        assert!(ctx.plist_content.is_none());
    }

    #[test]
    fn config_file_gets_parsed_json() {
        let parser = TreeSitterParser::new();
        let ctx = RuleContext::build(
            Path::new("app.json"),
            r#"{"name": "demo"}"#.to_string(),
            &parser,
        );
        assert!(ctx.config.is_some());
        assert!(ctx.ast.is_none());
    }

    #[test]
    fn malformed_json_leaves_config_empty() {
        let parser = TreeSitterParser::new();
        let ctx = RuleContext::build(Path::new("app.json"), "{not json".to_string(), &parser);
        assert!(ctx.config.is_none());
    }

    #[test]
    fn manifest_and_plist_carry_raw_text() {
        let parser = TreeSitterParser::new();
        let xml = RuleContext::build(
            Path::new("AndroidManifest.xml"),
            "<manifest/>".to_string(),
            &parser,
        );
        assert_eq!(xml.xml_content.as_deref(), Some("<manifest/>"));

        let plist = RuleContext::build(
            Path::new("Info.plist"),
            "<plist/>".to_string(),
            &parser,
        );
        assert_eq!(plist.plist_content.as_deref(), Some("<plist/>"));
    }
}
