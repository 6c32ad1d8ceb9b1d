//! Identifier-likelihood scoring for string values.

/// Strings at or below this length are always treated as identifiers.
const SHORT_STRING_FLOOR: usize = 6;

/// Maximum proportion of digits an identifier-like string may carry.
const MAX_DIGIT_RATIO: f64 = 0.3;

/// Maximum proportion of case transitions; camelCase words average one
/// transition per word, generated tokens alternate nearly every character.
const MAX_CASE_TRANSITION_RATIO: f64 = 0.4;

/// True for values structurally consistent with ordinary source
/// identifiers: kebab-case, dot-notation paths, camelCase / snake_case /
/// CONSTANT_CASE, short strings, and plain natural-language phrases. False
/// for long strings whose digit density or case churn looks generated.
pub fn is_likely_identifier(value: &str) -> bool {
    let v = value.trim();
    if v.len() <= SHORT_STRING_FLOOR {
        return true;
    }

    // Natural-language phrase: space-separated alphabetic words.
    if v.contains(' ') {
        return v
            .split_whitespace()
            .all(|w| w.chars().all(|c| c.is_alphabetic() || matches!(c, '\'' | ',' | '.' | '!' | '?')));
    }

    // Identifiers draw from alphanumerics plus -, _, . separators.
    if !v
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return false;
    }

    let len = v.chars().count() as f64;
    let digits = v.chars().filter(char::is_ascii_digit).count() as f64;
    if digits / len > MAX_DIGIT_RATIO {
        return false;
    }

    // Count lower→upper and upper→lower transitions between letters.
    let letters: Vec<char> = v.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }
    let transitions = letters
        .windows(2)
        .filter(|w| w[0].is_lowercase() != w[1].is_lowercase())
        .count() as f64;
    transitions / letters.len() as f64 <= MAX_CASE_TRANSITION_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_are_identifiers() {
        assert!(is_likely_identifier("x"));
        assert!(is_likely_identifier("abc123"));
        assert!(is_likely_identifier(""));
    }

    #[test]
    fn common_naming_conventions_are_identifiers() {
        assert!(is_likely_identifier("my-component-name"));
        assert!(is_likely_identifier("com.example.app.module"));
        assert!(is_likely_identifier("handleSubmitPassword"));
        assert!(is_likely_identifier("snake_case_value"));
        assert!(is_likely_identifier("MAX_RETRY_COUNT"));
    }

    #[test]
    fn natural_language_phrases_are_identifiers() {
        assert!(is_likely_identifier("Please enter your password"));
        assert!(!is_likely_identifier("xK9$q mZ2@p Lw8#r vN4!t aB6%u"));
    }

    #[test]
    fn generated_tokens_are_not_identifiers() {
        assert!(!is_likely_identifier("aBcDeFgHiJkLmNoPqRsTuVwXyZ"));
        assert!(!is_likely_identifier("x9f3K2m8Qz7Lp1Wn5Rv0Tb6Yc4"));
        assert!(!is_likely_identifier("A1b2C3d4E5f6G7h8J9k0L1m2N3o4"));
    }
}
