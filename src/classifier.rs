//! Strength classifier - scores a password and derives its character profile.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::feedback::Tier;
use crate::sections::{
    blacklist_section, character_variety_section, length_section, pattern_analysis_section,
    Finding, SectionResult,
};

/// Entropy at or below which a password is weak.
const WEAK_BITS: f64 = 30.0;
/// Score at the top of the weak band.
const WEAK_MAX: f64 = 1.0 / 3.0;
/// Entropy above `WEAK_BITS` that maps to `HARD_VAL`.
const HARD_BITS: f64 = WEAK_BITS * 3.0;
const HARD_VAL: f64 = 0.95;

/// Character breakdown of a password, computed independently of the score.
///
/// Every code point lands in exactly one of `letters`, `digits` or
/// `special_char_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterProfile {
    pub length: usize,
    pub letters: usize,
    pub digits: usize,
    pub special_char_count: usize,
    pub has_upper: bool,
    pub has_lower: bool,
}

impl CharacterProfile {
    pub fn of(password: &str) -> Self {
        let mut profile = Self::default();
        for c in password.chars() {
            profile.length += 1;
            if c.is_ascii_alphabetic() {
                profile.letters += 1;
                profile.has_upper |= c.is_ascii_uppercase();
                profile.has_lower |= c.is_ascii_lowercase();
            } else if c.is_ascii_digit() {
                profile.digits += 1;
            } else {
                profile.special_char_count += 1;
            }
        }
        profile
    }

    pub fn has_letters(&self) -> bool {
        self.letters > 0
    }

    pub fn has_digits(&self) -> bool {
        self.digits > 0
    }

    pub fn has_special(&self) -> bool {
        self.special_char_count > 0
    }
}

/// Counts characters outside `[A-Za-z0-9]`, non-ASCII letters included.
pub fn count_special_chars(password: &str) -> usize {
    password.chars().filter(|c| !c.is_ascii_alphanumeric()).count()
}

/// Output of the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Strength estimate in `[0.0, 1.0]`.
    pub score: f64,
    pub tier: Tier,
    pub profile: CharacterProfile,
    pub findings: Vec<Finding>,
}

/// Scores passwords, optionally consulting a common password list.
#[derive(Debug, Clone, Default)]
pub struct StrengthClassifier {
    blacklist: Option<Blacklist>,
}

impl StrengthClassifier {
    /// Classifier without a blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blacklist(blacklist: Blacklist) -> Self {
        Self { blacklist: Some(blacklist) }
    }

    pub fn blacklist(&self) -> Option<&Blacklist> {
        self.blacklist.as_ref()
    }

    /// Classifies a password.
    ///
    /// Deterministic and infallible for any input, the empty string included.
    pub fn classify(&self, password: &SecretString) -> ScoreResult {
        let pwd = password.expose_secret();
        let profile = CharacterProfile::of(pwd);

        // Orchestrator: execute sections in sequence
        let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
            ("length", length_section),
            ("variety", character_variety_section),
            ("pattern", pattern_analysis_section),
        ];

        let mut findings = Vec::new();
        if let Some(blacklist) = &self.blacklist {
            findings.extend(blacklist_section(password, blacklist));
        }
        for (_section_name, section_fn) in sections {
            if let Some(finding) = section_fn(password) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Section {} reported: {}", _section_name, finding);
                findings.push(finding);
            }
        }

        let distinct = {
            let mut chars: Vec<char> = pwd.chars().collect();
            chars.sort_unstable();
            chars.dedup();
            chars.len()
        };

        let penalty: f64 = findings.iter().map(Finding::penalty).product();
        let score = (entropy_score(profile.length, distinct) * penalty).clamp(0.0, 1.0);

        ScoreResult {
            score,
            tier: Tier::from_score(score),
            profile,
            findings,
        }
    }
}

/// Classifies a password without a blacklist.
pub fn classify(password: &SecretString) -> ScoreResult {
    StrengthClassifier::new().classify(password)
}

/// Entropy bits of `length` draws over `distinct` symbols.
pub fn entropy_bits(length: usize, distinct: usize) -> f64 {
    if length == 0 || distinct < 2 {
        return 0.0;
    }
    length as f64 * (distinct as f64).log2()
}

/// Maps entropy to `[0, 1]`: linear up to `WEAK_BITS`, then an exponential
/// approach to 1 reaching `HARD_VAL` at `WEAK_BITS + HARD_BITS`.
fn entropy_score(length: usize, distinct: usize) -> f64 {
    let bits = entropy_bits(length, distinct);
    if bits <= WEAK_BITS {
        return WEAK_MAX * bits / WEAK_BITS;
    }
    let k = -((1.0 - HARD_VAL) / (1.0 - WEAK_MAX)).ln() / HARD_BITS;
    1.0 - (1.0 - WEAK_MAX) * (-k * (bits - WEAK_BITS)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_count_special_chars() {
        assert_eq!(count_special_chars("Abc123"), 0);
        assert_eq!(count_special_chars("Abc!123$"), 2);
        assert_eq!(count_special_chars(""), 0);
        assert_eq!(count_special_chars("pass word"), 1);
        assert_eq!(count_special_chars("café1"), 1);
    }

    #[test]
    fn test_profile_partitions_code_points() {
        for pwd in ["", "Abc!123$", "Ünïcödé 42", "Tr0ub4dor&3", "🔒🔒x"] {
            let p = CharacterProfile::of(pwd);
            assert_eq!(p.letters + p.digits + p.special_char_count, p.length, "{}", pwd);
            assert_eq!(p.length, pwd.chars().count());
            assert_eq!(p.special_char_count, count_special_chars(pwd));
        }
    }

    #[test]
    fn test_classify_password_is_weak() {
        let result = classify(&secret("password"));
        assert!(result.score < 0.3, "got {}", result.score);
        assert_eq!(result.tier, Tier::Weak);
        assert!(result.profile.has_letters());
        assert!(!result.profile.has_digits());
    }

    #[test]
    fn test_classify_troubadour_is_medium() {
        let result = classify(&secret("Tr0ub4dor&3"));
        assert_eq!(result.tier, Tier::Medium, "got score {}", result.score);
        assert!(result.profile.has_letters());
        assert!(result.profile.has_digits());
        assert!(result.profile.has_special());
        assert_eq!(result.profile.special_char_count, 1);
    }

    #[test]
    fn test_classify_long_random_is_strong() {
        let result = classify(&secret("q7#Lm!v9Zp&2Rk*X4t$W"));
        assert_eq!(result.tier, Tier::Strong, "got score {}", result.score);
    }

    #[test]
    fn test_classify_edge_inputs_do_not_panic() {
        let long = "ab1!".repeat(50_000);
        for pwd in ["", "a", "🔒", "\u{0}\u{10FFFF}", long.as_str()] {
            let result = classify(&secret(pwd));
            assert!((0.0..=1.0).contains(&result.score), "{} for {:?}", result.score, pwd.len());
        }
        assert_eq!(classify(&secret("")).score, 0.0);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let a = classify(&secret("Some-Pass_42"));
        let b = classify(&secret("Some-Pass_42"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_non_decreasing_in_length() {
        let mut previous = 0.0;
        for n in 4..40 {
            let pwd: String = "aZ5!".chars().cycle().take(n).collect();
            let score = classify(&secret(&pwd)).score;
            assert!(score >= previous, "length {} dropped from {} to {}", n, previous, score);
            previous = score;
        }
    }

    #[test]
    fn test_runs_and_sequences_do_not_lower_longer_inputs() {
        // Each case appends characters already present, so the distinct set
        // stays fixed while runs or sequences appear.
        let cases = [
            ("Kq9#mZ2!wR4&tY7a", 'a'),
            ("Xy7!a", 'a'),
            ("Qw!9abcd", 'd'),
            ("1234", '4'),
        ];
        for (base, filler) in cases {
            let mut pwd = base.to_string();
            let mut previous = classify(&secret(&pwd));
            for _ in 0..6 {
                pwd.push(filler);
                let current = classify(&secret(&pwd));
                assert!(
                    current.score >= previous.score,
                    "{:?} scored {} after {}",
                    pwd,
                    current.score,
                    previous.score
                );
                assert!(current.tier as u8 >= previous.tier as u8, "{:?} dropped a tier", pwd);
                previous = current;
            }
        }
    }

    #[test]
    fn test_pattern_findings_are_advisory() {
        let short = classify(&secret("Kq9#mZ2!wR4&tY7aa"));
        let long = classify(&secret("Kq9#mZ2!wR4&tY7aaa"));

        assert!(long.findings.contains(&Finding::Repetitive));
        assert!(!short.findings.contains(&Finding::Repetitive));
        assert!(long.score >= short.score);
        assert_eq!(long.tier, Tier::Strong);
    }

    #[test]
    fn test_blacklisted_password_is_penalised() {
        let pwd = secret("Sunshine2024!");
        let plain = classify(&pwd);
        let classifier = StrengthClassifier::with_blacklist(Blacklist::from_words(["sunshine2024!"]));
        let listed = classifier.classify(&pwd);

        assert!(listed.findings.contains(&Finding::Common));
        assert!(listed.score < plain.score);
        assert_eq!(listed.tier, Tier::Weak);
    }

    #[test]
    fn test_entropy_bits() {
        assert_eq!(entropy_bits(0, 0), 0.0);
        assert_eq!(entropy_bits(10, 1), 0.0);
        assert!((entropy_bits(8, 16) - 32.0).abs() < 1e-9);
    }
}
