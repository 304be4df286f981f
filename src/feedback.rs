//! Feedback composer - maps a score to the label, color and advice shown to the user.

use std::fmt;

/// Lower bound of the medium tier.
pub const MEDIUM_THRESHOLD: f64 = 0.3;
/// Lower bound of the strong tier.
pub const STRONG_THRESHOLD: f64 = 0.7;

/// Discrete strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Weak,
    Medium,
    Strong,
}

impl Tier {
    /// Ascending thresholds, first match wins. NaN is treated as weak.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() || score < MEDIUM_THRESHOLD {
            Tier::Weak
        } else if score < STRONG_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Weak => "Weak",
            Tier::Medium => "Medium",
            Tier::Strong => "Strong",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display color token for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Red,
    Orange,
    Green,
}

impl ColorToken {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Red => "#FF4B4B",
            ColorToken::Orange => "#FFA500",
            ColorToken::Green => "#32CD32",
        }
    }
}

/// Everything the UI shows for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackBundle {
    pub tier: Tier,
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: ColorToken,
    pub advice: &'static str,
}

impl FeedbackBundle {
    /// Text handed to the voice synthesizer.
    pub fn narration(&self) -> String {
        format!("{}. {}", self.label, self.advice)
    }

    /// Label prefixed with its glyph, e.g. "✅ Strong".
    pub fn headline(&self) -> String {
        format!("{} {}", self.glyph, self.label)
    }
}

const WEAK: FeedbackBundle = FeedbackBundle {
    tier: Tier::Weak,
    label: "Weak",
    glyph: "❌",
    color: ColorToken::Red,
    advice: "Your password is weak. Try adding uppercase letters, numbers, and special symbols.",
};

const MEDIUM: FeedbackBundle = FeedbackBundle {
    tier: Tier::Medium,
    label: "Medium",
    glyph: "⚠️",
    color: ColorToken::Orange,
    advice: "Your password is medium. Increase length and add special characters.",
};

const STRONG: FeedbackBundle = FeedbackBundle {
    tier: Tier::Strong,
    label: "Strong",
    glyph: "✅",
    color: ColorToken::Green,
    advice: "Your password is strong. Keep using secure passwords like this!",
};

pub fn feedback_for(tier: Tier) -> FeedbackBundle {
    match tier {
        Tier::Weak => WEAK,
        Tier::Medium => MEDIUM,
        Tier::Strong => STRONG,
    }
}

/// Composes the feedback for a score. Pure function of `score`.
pub fn compose(score: f64) -> FeedbackBundle {
    feedback_for(Tier::from_score(score))
}
