//! Common password blacklist
//!
//! Loads a newline separated list of well known passwords and answers
//! case-insensitive membership queries for the classifier.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the blacklist location.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Set of common passwords, stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    words: HashSet<String>,
}

impl Blacklist {
    /// Loads the blacklist from [`blacklist_path`].
    pub fn load() -> Result<Self, BlacklistError> {
        Self::from_path(blacklist_path())
    }

    /// Loads the blacklist from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::from_words(content.lines());

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Builds a blacklist from in-memory entries. Blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: serialized test, no other thread reads the environment
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: serialized test, no other thread reads the environment
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_blacklist_path_default() {
        remove_env(BLACKLIST_PATH_ENV);

        assert_eq!(blacklist_path(), PathBuf::from("./assets/blacklist.txt"));
    }

    #[test]
    #[serial]
    fn test_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        assert_eq!(blacklist_path(), PathBuf::from(custom_path));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_file_not_found() {
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        match Blacklist::load() {
            Err(BlacklistError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/blacklist.txt"));
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "   ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let result = Blacklist::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password123").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");
        writeln!(temp_file, "QWERTY").expect("Failed to write");

        let blacklist = Blacklist::from_path(temp_file.path()).expect("Should load");
        assert_eq!(blacklist.len(), 2);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let blacklist = Blacklist::from_words(["TestPassword"]);

        assert!(blacklist.contains("testpassword"));
        assert!(blacklist.contains("TESTPASSWORD"));
        assert!(!blacklist.contains("veryuncommonpassword987"));
    }

    #[test]
    fn test_default_is_empty() {
        let blacklist = Blacklist::default();
        assert!(blacklist.is_empty());
        assert!(!blacklist.contains("password"));
    }
}
