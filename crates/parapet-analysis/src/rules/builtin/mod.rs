//! Built-in reference rules.
//!
//! A deliberately small set covering the most common findings; the full
//! catalog ships separately and registers through the same `Rule` contract.

pub mod manifest;
pub mod network;
pub mod secrets;

use std::sync::Arc;

use super::traits::{RuleCategory, RuleGroup};

/// Default rule groups registered by callers that want the built-in set.
pub fn default_rule_groups() -> Vec<RuleGroup> {
    vec![
        RuleGroup::new(
            RuleCategory::Secrets,
            vec![Arc::new(secrets::HardcodedSecretRule)],
        ),
        RuleGroup::new(
            RuleCategory::Network,
            vec![Arc::new(network::InsecureHttpRule)],
        ),
        RuleGroup::new(
            RuleCategory::Platform,
            vec![Arc::new(manifest::CleartextTrafficRule)],
        ),
    ]
}
