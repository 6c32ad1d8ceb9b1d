//! Hardcoded-secret detection in source files.

use once_cell::sync::Lazy;
use regex::Regex;

use parapet_core::errors::DetectionError;
use parapet_core::types::{Finding, Severity};

use crate::heuristics::{
    extract_snippet, is_in_form_validation_context, is_likely_sensitive_variable,
    looks_like_secret, DEFAULT_CONTEXT_LINES,
};
use crate::rules::context::RuleContext;
use crate::rules::traits::Rule;

/// String-literal assignment: `name = "value"` or `name: 'value'`.
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<name>[A-Za-z_$][A-Za-z0-9_$]*)\s*[:=]\s*["'](?P<value>[^"']+)["']"#)
        .expect("assignment regex")
});

/// Vendor token material anywhere in a line, independent of assignment
/// shape.
static VENDOR_TOKENS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"ghp_[A-Za-z0-9]{36}").expect("vendor regex"),
        Regex::new(r"sk_(live|test)_[A-Za-z0-9]{16,}").expect("vendor regex"),
        Regex::new(r"\bAKIA[0-9A-Z]{16}\b").expect("vendor regex"),
    ]
});

fn is_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower.contains("example")
        || lower.contains("placeholder")
        || lower.contains("your_")
        || lower.contains("changeme")
        || lower.contains("xxx")
        || value.chars().all(|c| c == 'x' || c == 'X' || c == '*')
}

/// Flags string literals that look like real credentials committed to
/// source.
pub struct HardcodedSecretRule;

impl Rule for HardcodedSecretRule {
    fn id(&self) -> &str {
        "sec-hardcoded-secret"
    }

    fn description(&self) -> &str {
        "Hardcoded secret or credential in source code"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn file_types(&self) -> &[&str] {
        &[".ts", ".tsx", ".js", ".jsx"]
    }

    fn apply(&self, ctx: &RuleContext) -> Result<Vec<Finding>, DetectionError> {
        let mut findings = Vec::new();

        for (idx, line) in ctx.file_content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") || trimmed.starts_with('*') {
                continue;
            }
            if is_in_form_validation_context(line) {
                continue;
            }

            let line_no = idx + 1;
            let mut flagged = false;

            for caps in ASSIGNMENT.captures_iter(line) {
                let name = &caps["name"];
                let value = &caps["value"];
                if is_placeholder(value) {
                    continue;
                }
                if is_likely_sensitive_variable(name, value) {
                    findings.push(self.finding(ctx, line_no));
                    flagged = true;
                    break;
                }
            }

            if !flagged
                && VENDOR_TOKENS.iter().any(|p| {
                    p.find(line)
                        .is_some_and(|m| !is_placeholder(m.as_str()) && looks_like_secret(m.as_str().trim()))
                })
            {
                findings.push(self.finding(ctx, line_no));
            }
        }

        Ok(findings)
    }
}

impl HardcodedSecretRule {
    fn finding(&self, ctx: &RuleContext, line: usize) -> Finding {
        Finding::new(self.id(), self.description(), self.severity(), &ctx.file_path)
            .with_line(line)
            .with_snippet(extract_snippet(&ctx.file_content, line, DEFAULT_CONTEXT_LINES))
            .with_suggestion(
                "Move the value to secure storage or environment configuration injected at build time",
            )
    }
}
