//! Context classifiers: form/validation code and debug/dev artifacts.
//!
//! These keep benign credential *handling* code (login forms, validators)
//! and non-production code (tests, mocks, debug utilities) out of scan
//! results.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Idioms that mark a line as UI/state/form handling rather than storage.
static FORM_CONTEXT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // State-hook declarations.
        Regex::new(r"\buse(State|Ref|Form|Field|Controller)\b\s*[<(]").expect("form regex"),
        // Form-library registration calls.
        Regex::new(r#"\b(register|setValue|watch)\s*\(\s*['"]"#).expect("form regex"),
        // Input placeholder/label attributes.
        Regex::new(r#"(?i)\b(placeholder|label)\s*[=:]"#).expect("form regex"),
        // Secure-entry UI attributes.
        Regex::new(r#"\bsecureTextEntry\b|autoComplete\s*=\s*["']"#).expect("form regex"),
        // Validation naming.
        Regex::new(r"(?i)\b(validate|validation|validator)\w*\s*[(=:]").expect("form regex"),
        Regex::new(r"(?i)\bis_?valid\w*\b").expect("form regex"),
        // Comment markers.
        Regex::new(r"(?i)(//|/\*).*\b(form|validation|placeholder)\b").expect("form regex"),
    ]
});

/// Development-flag guards inside code or a finding snippet.
static DEBUG_GUARD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // React Native global debug flag.
        Regex::new(r"\b__DEV__\b").expect("debug regex"),
        // Environment-based development checks.
        Regex::new(r#"process\.env\.NODE_ENV\s*===?\s*['"]development['"]"#).expect("debug regex"),
        Regex::new(r#"process\.env\.NODE_ENV\s*!==?\s*['"]production['"]"#).expect("debug regex"),
        // Explicit DEBUG-style guards.
        Regex::new(r"\bif\s*\(\s*(global\.)?DEBUG\b").expect("debug regex"),
        Regex::new(r"(?i)\bdebug\s*(===?|=)\s*true\b").expect("debug regex"),
    ]
});

/// Path fragments marking development artifacts.
const DEV_PATH_FRAGMENTS: &[&str] = &[
    "/__tests__/",
    "/__mocks__/",
    "/__fixtures__/",
    "/test/",
    "/tests/",
    "/e2e/",
    "/mocks/",
    "/debug/",
    "/node_modules/",
];

/// File-name conventions marking development artifacts.
const DEV_FILE_MARKERS: &[&str] = &[".test.", ".spec.", ".stories.", ".mock."];

/// True if the line matches UI/state/form idioms, used to avoid flagging
/// benign password/token handling UI code as a leak.
pub fn is_in_form_validation_context(line: &str) -> bool {
    FORM_CONTEXT_PATTERNS.iter().any(|p| p.is_match(line))
}

/// True if either the code/snippet text contains a development-flag guard
/// or the file path matches a development-artifact convention. Any one
/// signal is sufficient.
pub fn is_in_debug_context(code: &str, snippet: &str, file_path: &Path) -> bool {
    let path = file_path.to_string_lossy().replace('\\', "/").to_lowercase();
    if DEV_FILE_MARKERS.iter().any(|m| path.contains(m)) {
        return true;
    }
    if DEV_PATH_FRAGMENTS.iter().any(|f| path.contains(f)) {
        return true;
    }
    DEBUG_GUARD_PATTERNS
        .iter()
        .any(|p| p.is_match(code) || p.is_match(snippet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_idioms_match() {
        assert!(is_in_form_validation_context(
            "const [password, setPassword] = useState('');"
        ));
        assert!(is_in_form_validation_context(
            r#"<TextInput placeholder="Password" secureTextEntry />"#
        ));
        assert!(is_in_form_validation_context(
            r#"{...register("password", { required: true })}"#
        ));
        assert!(is_in_form_validation_context(
            "const validatePassword = (value) => value.length >= 8;"
        ));
    }

    #[test]
    fn plain_assignments_do_not_match_form_context() {
        assert!(!is_in_form_validation_context(
            r#"const apiKey = "x7Kp2mQ9fLw4Rv8Tz1Yb5Nc3Jd6Hg0S";"#
        ));
    }

    #[test]
    fn dev_paths_are_debug_context() {
        assert!(is_in_debug_context("", "", Path::new("/src/utils.test.ts")));
        assert!(is_in_debug_context("", "", Path::new("/src/__tests__/login.ts")));
        assert!(is_in_debug_context("", "", Path::new("/app/__mocks__/api.js")));
        assert!(is_in_debug_context("", "", Path::new("/src/Button.stories.tsx")));
    }

    #[test]
    fn production_paths_without_guards_are_not_debug_context() {
        assert!(!is_in_debug_context("const x = 1;", "", Path::new("/src/App.tsx")));
        // "latest" must not match the ".test." file marker.
        assert!(!is_in_debug_context("", "", Path::new("/src/latest-news.ts")));
    }

    #[test]
    fn debug_guards_in_code_match() {
        assert!(is_in_debug_context(
            "if (__DEV__) { console.log(token); }",
            "",
            Path::new("/src/App.tsx"),
        ));
        assert!(is_in_debug_context(
            "if (process.env.NODE_ENV !== 'production') { expose(); }",
            "",
            Path::new("/src/App.tsx"),
        ));
        assert!(is_in_debug_context(
            "",
            "if (DEBUG) { dump(secret); }",
            Path::new("/src/App.tsx"),
        ));
    }
}
