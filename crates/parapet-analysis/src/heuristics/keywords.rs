//! Sensitive-keyword matching on identifier names.

/// Single-component keywords: a component of the name must equal one of
/// these exactly (case-insensitive).
const SENSITIVE_KEYWORDS: &[&str] = &[
    "password",
    "passwd",
    "pwd",
    "passphrase",
    "secret",
    "token",
    "jwt",
    "bearer",
    "credential",
    "credentials",
    "ssn",
    "email",
    "cvv",
    "pin",
];

/// Compound keywords spanning two adjacent components (`apiKey`,
/// `credit_card`, …), matched against the joined pair.
const SENSITIVE_COMPOUNDS: &[&str] = &[
    "apikey",
    "apisecret",
    "secretkey",
    "privatekey",
    "accesstoken",
    "refreshtoken",
    "authtoken",
    "idtoken",
    "sessionkey",
    "clientsecret",
    "creditcard",
    "cardnumber",
    "phonenumber",
    "socialsecurity",
];

/// Split an identifier on camelCase, snake_case, kebab-case, and dot
/// boundaries into lowercase components.
fn split_components(name: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = name.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == '.' || c == ' ' {
            if !current.is_empty() {
                components.push(std::mem::take(&mut current));
            }
            continue;
        }
        // camelCase boundary: lower→Upper, or the last capital of an
        // acronym followed by a lowercase letter (HTTPServer → http server).
        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || (chars[i - 1].is_uppercase() && next_lower) {
                components.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        components.push(current);
    }
    components
}

/// True if `name`, split on word boundaries, contains a whole-component
/// match against the sensitive dictionary.
///
/// Matches never cross word boundaries: `username` does not match the
/// `password`-family even though both relate to login forms, and `name`
/// inside `phoneNumber` only matches through the compound entry.
pub fn contains_sensitive_keyword(name: &str) -> bool {
    let components = split_components(name);

    for component in &components {
        if SENSITIVE_KEYWORDS.contains(&component.as_str())
            || SENSITIVE_COMPOUNDS.contains(&component.as_str())
        {
            return true;
        }
    }

    components.windows(2).any(|pair| {
        let joined = format!("{}{}", pair[0], pair[1]);
        SENSITIVE_COMPOUNDS.contains(&joined.as_str())
    })
}
