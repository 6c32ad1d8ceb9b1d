//! Heuristic classifiers.
//!
//! Pure, stateless predicate and scoring functions used by the engine and
//! the built-in rules. No I/O, no shared state; every function is
//! independently unit-testable.

pub mod context;
pub mod entropy;
pub mod identifier;
pub mod keywords;
pub mod secret;
pub mod snippet;
pub mod variable;

pub use context::{is_in_debug_context, is_in_form_validation_context};
pub use entropy::shannon_entropy;
pub use identifier::is_likely_identifier;
pub use keywords::contains_sensitive_keyword;
pub use secret::looks_like_secret;
pub use snippet::{extract_snippet, line_number, DEFAULT_CONTEXT_LINES};
pub use variable::is_likely_sensitive_variable;
