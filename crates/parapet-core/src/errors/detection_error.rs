//! Rule execution errors.

/// Error raised by a rule's `apply`.
///
/// Failure isolation is per invocation: the engine discards the failing
/// rule's findings for that file and keeps running the remaining rules.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Rule {rule_id} failed: {message}")]
    RuleFailed { rule_id: String, message: String },

    #[error("Invalid pattern in rule {rule_id}: {message}")]
    InvalidPattern { rule_id: String, message: String },
}
