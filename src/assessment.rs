//! Password assessment - everything derived from one password.

use secrecy::{ExposeSecret, SecretString};

use crate::classifier::{CharacterProfile, StrengthClassifier};
use crate::feedback::{feedback_for, FeedbackBundle, Tier};
use crate::sections::Finding;

/// Result of assessing one password. Recomputed on change, never persisted.
#[derive(Debug)]
pub struct PasswordAssessment {
    password: SecretString,
    pub score: f64,
    pub tier: Tier,
    pub profile: CharacterProfile,
    pub findings: Vec<Finding>,
    pub feedback: FeedbackBundle,
}

impl PasswordAssessment {
    pub fn assess(classifier: &StrengthClassifier, password: SecretString) -> Self {
        let result = classifier.classify(&password);
        Self {
            password,
            score: result.score,
            tier: result.tier,
            profile: result.profile,
            findings: result.findings,
            feedback: feedback_for(result.tier),
        }
    }

    /// The assessed input, exactly as entered.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Whether `candidate` is the password this assessment was computed for.
    pub fn is_for(&self, candidate: &SecretString) -> bool {
        self.password.expose_secret() == candidate.expose_secret()
    }

    /// Width of the progress bar, `score * 100` rounded.
    pub fn progress_percent(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
