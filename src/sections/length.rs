//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, SectionResult};

pub const MIN_LENGTH: usize = 8;

/// Flags passwords shorter than [`MIN_LENGTH`] code points.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Finding::TooShort { min: MIN_LENGTH });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, Some(Finding::TooShort { min: 8 }));
        assert_eq!(
            result.unwrap().to_string(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_counts_code_points() {
        // 8 code points, 16 bytes
        let pwd = SecretString::new("ääääääää".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }
}
