//! Password heuristic sections
//!
//! Each section inspects one aspect of a password and may report a
//! [`Finding`]. Findings are shown as hints; only a blacklist hit lowers the
//! score.

mod blacklist;
mod length;
mod pattern;
mod variety;

use std::fmt;

pub use blacklist::blacklist_section;
pub use length::{length_section, MIN_LENGTH};
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

/// Result type for section functions.
/// - `Some(finding)` - section flagged the password
/// - `None` - section passed
pub type SectionResult = Option<Finding>;

/// Character classes checked by the variety section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Uppercase => write!(f, "uppercase"),
            CharClass::Lowercase => write!(f, "lowercase"),
            CharClass::Digit => write!(f, "numbers"),
            CharClass::Special => write!(f, "special characters"),
        }
    }
}

/// Something a section noticed about a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    TooShort { min: usize },
    MissingClasses(Vec<CharClass>),
    Repetitive,
    Sequential,
    Common,
}

impl Finding {
    /// Multiplier applied to the entropy score. Advisory findings return 1.0.
    ///
    /// Only a blacklist hit lowers the score; a penalty that grows with
    /// length would let a longer password score below its own prefix.
    pub fn penalty(&self) -> f64 {
        match self {
            Finding::TooShort { .. }
            | Finding::MissingClasses(_)
            | Finding::Repetitive
            | Finding::Sequential => 1.0,
            Finding::Common => 0.25,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::TooShort { min } => {
                write!(f, "Password must be at least {} characters", min)
            }
            Finding::MissingClasses(classes) => {
                let names: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
                write!(f, "Missing: {}", names.join(", "))
            }
            Finding::Repetitive => write!(f, "Password contains repetitive patterns"),
            Finding::Sequential => write!(f, "Password contains sequential patterns"),
            Finding::Common => write!(f, "Password is in the list of most common passwords"),
        }
    }
}
