//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::{CharClass, Finding, SectionResult};

/// Reports the ASCII character classes the password lacks.
///
/// Anything outside `[A-Za-z0-9]` counts as special.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    let missing: Vec<CharClass> = [
        (has_upper, CharClass::Uppercase),
        (has_lower, CharClass::Lowercase),
        (has_digit, CharClass::Digit),
        (has_special, CharClass::Special),
    ]
    .into_iter()
    .filter(|(present, _)| !present)
    .map(|(_, class)| class)
    .collect();

    if !missing.is_empty() {
        return Some(Finding::MissingClasses(missing));
    }
    None
}
