//! Pattern analysis section - detects repetitive and sequential patterns.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, SectionResult};

const REPEAT_RUN: usize = 3;
const SEQUENCE_RUN: usize = 4;

/// Looks for runs of identical characters ("aaa") and runs of consecutive
/// code points in either direction ("1234", "dcba").
pub fn pattern_analysis_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < REPEAT_RUN {
        return None;
    }

    let mut repeated_count = 1;
    for pair in chars.windows(2) {
        if pair[0] == pair[1] {
            repeated_count += 1;
            if repeated_count >= REPEAT_RUN {
                return Some(Finding::Repetitive);
            }
        } else {
            repeated_count = 1;
        }
    }

    let is_sequential = chars.windows(SEQUENCE_RUN).any(|window| {
        let ascending = window
            .windows(2)
            .all(|w| (w[1] as u32).checked_sub(w[0] as u32) == Some(1));
        let descending = window
            .windows(2)
            .all(|w| (w[0] as u32).checked_sub(w[1] as u32) == Some(1));
        ascending || descending
    });

    if is_sequential {
        return Some(Finding::Sequential);
    }

    None
}
