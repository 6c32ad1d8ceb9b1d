//! Android manifest misconfiguration checks.

use parapet_core::errors::DetectionError;
use parapet_core::types::{Finding, Severity};

use crate::heuristics::{extract_snippet, line_number, DEFAULT_CONTEXT_LINES};
use crate::rules::context::RuleContext;
use crate::rules::traits::Rule;

const CLEARTEXT_ATTR: &str = r#"android:usesCleartextTraffic="true""#;

/// Flags manifests that globally permit cleartext network traffic.
pub struct CleartextTrafficRule;

impl Rule for CleartextTrafficRule {
    fn id(&self) -> &str {
        "platform-cleartext-traffic"
    }

    fn description(&self) -> &str {
        "Android manifest allows cleartext network traffic"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn file_types(&self) -> &[&str] {
        &[".xml"]
    }

    fn apply(&self, ctx: &RuleContext) -> Result<Vec<Finding>, DetectionError> {
        let Some(xml) = ctx.xml_content.as_deref() else {
            return Ok(Vec::new());
        };

        let mut findings = Vec::new();
        if let Some(offset) = xml.find(CLEARTEXT_ATTR) {
            let line = line_number(xml, offset);
            findings.push(
                Finding::new(self.id(), self.description(), self.severity(), &ctx.file_path)
                    .with_line(line)
                    .with_snippet(extract_snippet(xml, line, DEFAULT_CONTEXT_LINES))
                    .with_suggestion(
                        "Remove android:usesCleartextTraffic or scope exceptions via a network security config",
                    ),
            );
        }

        Ok(findings)
    }
}
