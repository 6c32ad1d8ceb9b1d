//! Insecure network call detection.

use once_cell::sync::Lazy;
use regex::Regex;

use parapet_core::errors::DetectionError;
use parapet_core::types::{Finding, Severity};

use crate::heuristics::{extract_snippet, DEFAULT_CONTEXT_LINES};
use crate::rules::context::RuleContext;
use crate::rules::traits::Rule;

/// Plain-HTTP URL in a string literal.
static HTTP_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']http://[^"'\s]+["']"#).expect("http regex"));

/// Loopback and local-network targets are fine over HTTP.
static LOCAL_TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"http://(localhost|127\.0\.0\.1|10\.0\.2\.2|0\.0\.0\.0)").expect("local regex")
});

/// Flags cleartext HTTP endpoints in application code.
pub struct InsecureHttpRule;

impl Rule for InsecureHttpRule {
    fn id(&self) -> &str {
        "net-insecure-http"
    }

    fn description(&self) -> &str {
        "Network request to a cleartext http:// endpoint"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn file_types(&self) -> &[&str] {
        &[".ts", ".tsx", ".js", ".jsx", ".json"]
    }

    fn apply(&self, ctx: &RuleContext) -> Result<Vec<Finding>, DetectionError> {
        let mut findings = Vec::new();

        for (idx, line) in ctx.file_content.lines().enumerate() {
            if HTTP_URL.is_match(line) && !LOCAL_TARGET.is_match(line) {
                let line_no = idx + 1;
                findings.push(
                    Finding::new(self.id(), self.description(), self.severity(), &ctx.file_path)
                        .with_line(line_no)
                        .with_snippet(extract_snippet(&ctx.file_content, line_no, DEFAULT_CONTEXT_LINES))
                        .with_suggestion("Use https:// for all non-local endpoints"),
                );
            }
        }

        Ok(findings)
    }
}
