//! Blacklist section - checks if password is in common password list.

use crate::blacklist::Blacklist;
use secrecy::{ExposeSecret, SecretString};
use super::{Finding, SectionResult};

/// Flags passwords found in the common password list.
pub fn blacklist_section(password: &SecretString, blacklist: &Blacklist) -> SectionResult {
    if blacklist.contains(password.expose_secret()) {
        return Some(Finding::Common);
    }
    None
}
