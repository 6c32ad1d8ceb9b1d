//! Rule trait and registration types.

use std::sync::Arc;

use parapet_core::errors::DetectionError;
use parapet_core::types::{Finding, Severity};

use super::context::RuleContext;

/// Trait that every detection rule implements.
///
/// Registered once and never mutated; the engine stores rules as a
/// homogeneous collection of trait objects.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> &str;

    /// Human-readable description of what the rule detects.
    fn description(&self) -> &str;

    /// Severity of the findings this rule produces.
    fn severity(&self) -> Severity;

    /// Extension suffixes this rule applies to (e.g. `".ts"`, `".xml"`).
    fn file_types(&self) -> &[&str];

    /// Run the rule against one file's context.
    fn apply(&self, ctx: &RuleContext) -> Result<Vec<Finding>, DetectionError>;
}

/// Rule categories. Grouping is registration metadata only, never a
/// scheduling unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Secrets,
    Network,
    Storage,
    Crypto,
    Platform,
    Code,
}

impl RuleCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Secrets => "secrets",
            Self::Network => "network",
            Self::Storage => "storage",
            Self::Crypto => "crypto",
            Self::Platform => "platform",
            Self::Code => "code",
        }
    }
}

/// A registration unit: a category tag and an ordered list of rules.
pub struct RuleGroup {
    pub category: RuleCategory,
    pub rules: Vec<Arc<dyn Rule>>,
}

impl RuleGroup {
    pub fn new(category: RuleCategory, rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { category, rules }
    }
}
