//! Blocklist management module
//!
//! Handles loading and querying the NIST reference dataset: compromised
//! passwords, keyboard walks and contextual words.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use thiserror::Error;

static REFERENCE_DATA: RwLock<Option<Arc<ReferenceData>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Blocklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blocklist file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse blocklist file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Blocklist dataset is empty")]
    Empty,
}

/// On-disk dataset layout: three top-level keys, with keyboard walks and
/// contextual words grouped under named categories.
#[derive(Debug, Deserialize)]
struct RawDataset {
    common_passwords: Vec<String>,
    keyboard_walks: RawKeyboardWalks,
    contextual_words: RawContextualWords,
}

#[derive(Debug, Deserialize)]
struct RawKeyboardWalks {
    rows: BTreeMap<String, Vec<String>>,
    diagonals: Vec<String>,
    numpad: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawContextualWords {
    authentication: Vec<String>,
    roles: Vec<String>,
    greetings: Vec<String>,
}

/// Immutable, normalized reference datasets consumed by the analyzer.
///
/// Built once per process by [`init_blocklist`], or constructed directly
/// with [`ReferenceData::new`] when injecting synthetic data in tests.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    compromised: HashSet<String>,
    keyboard_walks: Vec<String>,
    contextual_words: Vec<String>,
}

impl ReferenceData {
    /// Builds a normalized snapshot from raw entries.
    ///
    /// All strings are lower-cased. Compromised passwords become a set,
    /// keyboard walks are sorted longest-first then deduplicated, and
    /// contextual words are deduplicated preserving their input order.
    pub fn new(
        compromised: Vec<String>,
        keyboard_walks: Vec<String>,
        contextual_words: Vec<String>,
    ) -> Self {
        let compromised: HashSet<String> =
            compromised.into_iter().map(|p| p.to_lowercase()).collect();

        // Longest-first so a scan always hits the most specific walk first.
        let mut walks: Vec<String> = keyboard_walks
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        walks.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let mut seen = HashSet::new();
        walks.retain(|w| seen.insert(w.clone()));

        let mut words: Vec<String> = contextual_words
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        let mut seen = HashSet::new();
        words.retain(|w| seen.insert(w.clone()));

        Self {
            compromised,
            keyboard_walks: walks,
            contextual_words: words,
        }
    }

    /// Parses and normalizes a dataset from its JSON document.
    pub fn from_json(content: &str) -> Result<Self, BlocklistError> {
        let raw: RawDataset = serde_json::from_str(content)?;

        let mut walks: Vec<String> = Vec::new();
        for row in raw.keyboard_walks.rows.values() {
            walks.extend(row.iter().cloned());
        }
        walks.extend(raw.keyboard_walks.diagonals);
        walks.extend(raw.keyboard_walks.numpad);

        let mut words = raw.contextual_words.authentication;
        words.extend(raw.contextual_words.roles);
        words.extend(raw.contextual_words.greetings);

        let data = Self::new(raw.common_passwords, walks, words);
        if data.compromised.is_empty()
            && data.keyboard_walks.is_empty()
            && data.contextual_words.is_empty()
        {
            return Err(BlocklistError::Empty);
        }
        Ok(data)
    }

    /// Reads and parses a dataset file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlocklistError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BlocklistError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Checks if a password is a known compromised one (case-insensitive).
    pub fn is_compromised(&self, password: &str) -> bool {
        self.compromised.contains(&password.to_lowercase())
    }

    /// Checks if the password contains any keyboard-walk substring.
    pub fn has_keyboard_walk(&self, password: &str) -> bool {
        let lower = password.to_lowercase();
        self.keyboard_walks.iter().any(|w| lower.contains(w.as_str()))
    }

    /// Checks if the password contains any contextual-word substring.
    pub fn has_contextual_word(&self, password: &str) -> bool {
        let lower = password.to_lowercase();
        self.contextual_words.iter().any(|w| lower.contains(w.as_str()))
    }

    pub fn compromised_count(&self) -> usize {
        self.compromised.len()
    }

    pub fn keyboard_walk_count(&self) -> usize {
        self.keyboard_walks.len()
    }

    pub fn contextual_word_count(&self) -> usize {
        self.contextual_words.len()
    }
}

/// Returns the blocklist dataset path.
///
/// Priority:
/// 1. Environment variable `PWD_BLOCKLIST_PATH`
/// 2. Default path `./assets/nist_blocklist.json`
pub fn blocklist_path() -> PathBuf {
    std::env::var("PWD_BLOCKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/nist_blocklist.json"))
}

/// Initializes the process-wide reference dataset from the default path.
///
/// Idempotent: the dataset is loaded at most once per process; subsequent
/// calls return the cached snapshot without touching the filesystem.
///
/// # Errors
///
/// Returns [`BlocklistError`] if the file does not exist, cannot be read,
/// is not valid JSON, or contains no entries at all.
pub fn init_blocklist() -> Result<Arc<ReferenceData>, BlocklistError> {
    init_blocklist_from_path(blocklist_path())
}

/// Initializes the process-wide reference dataset from a specific path.
///
/// Under concurrent first access a single caller performs the load while
/// the others block on the lock and then observe the winner's snapshot.
pub fn init_blocklist_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Arc<ReferenceData>, BlocklistError> {
    let path = path.as_ref();

    {
        let guard = REFERENCE_DATA.read().unwrap();
        if let Some(data) = guard.as_ref() {
            return Ok(Arc::clone(data));
        }
    }

    let mut guard = REFERENCE_DATA.write().unwrap();
    if let Some(data) = guard.as_ref() {
        // Lost the race: the cached snapshot wins.
        return Ok(Arc::clone(data));
    }

    let data = match ReferenceData::from_path(path) {
        Ok(data) => Arc::new(data),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist initialization FAILED: {}", e);
            return Err(e);
        }
    };

    *guard = Some(Arc::clone(&data));

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Blocklist initialized: {} compromised passwords, {} keyboard walks, {} contextual words from {:?}",
        data.compromised_count(),
        data.keyboard_walk_count(),
        data.contextual_word_count(),
        path
    );

    Ok(data)
}

/// Returns the cached reference dataset.
///
/// Returns `None` if [`init_blocklist`] has not been called.
pub fn reference_data() -> Option<Arc<ReferenceData>> {
    REFERENCE_DATA.read().unwrap().clone()
}

/// Resets the cached dataset for testing purposes.
#[cfg(test)]
pub fn reset_blocklist_for_testing() {
    let mut guard = REFERENCE_DATA.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn sample_json() -> &'static str {
        r#"{
            "common_passwords": ["Password", "123456", "letmein"],
            "keyboard_walks": {
                "rows": {
                    "top": ["qwerty", "wert"],
                    "home": ["asdf"]
                },
                "diagonals": ["1qaz", "wert"],
                "numpad": ["123456", "147258"]
            },
            "contextual_words": {
                "authentication": ["password", "login"],
                "roles": ["admin", "root"],
                "greetings": ["welcome", "login"]
            }
        }"#
    }

    fn setup_with_tempfile(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", content).expect("Failed to write");
        temp_file
    }

    #[test]
    #[serial]
    fn test_blocklist_path_default() {
        remove_env("PWD_BLOCKLIST_PATH");

        let path = blocklist_path();
        assert_eq!(path, PathBuf::from("./assets/nist_blocklist.json"));
    }

    #[test]
    #[serial]
    fn test_blocklist_path_from_env() {
        let custom_path = "/custom/path/blocklist.json";
        set_env("PWD_BLOCKLIST_PATH", custom_path);

        let path = blocklist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_BLOCKLIST_PATH");
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = ReferenceData::from_path("/nonexistent/path/blocklist.json");
        assert!(matches!(result, Err(BlocklistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = ReferenceData::from_json("{ not valid json");
        assert!(matches!(result, Err(BlocklistError::Parse(_))));
    }

    #[test]
    fn test_from_json_missing_key() {
        let result = ReferenceData::from_json(r#"{"common_passwords": []}"#);
        assert!(matches!(result, Err(BlocklistError::Parse(_))));
    }

    #[test]
    fn test_from_json_empty_dataset() {
        let result = ReferenceData::from_json(
            r#"{
                "common_passwords": [],
                "keyboard_walks": {"rows": {}, "diagonals": [], "numpad": []},
                "contextual_words": {"authentication": [], "roles": [], "greetings": []}
            }"#,
        );
        assert!(matches!(result, Err(BlocklistError::Empty)));
    }

    #[test]
    fn test_from_json_normalization() {
        let data = ReferenceData::from_json(sample_json()).unwrap();

        // lower-cased set membership
        assert!(data.is_compromised("password"));
        assert!(data.is_compromised("PASSWORD"));
        assert!(!data.is_compromised("correcthorse"));

        assert_eq!(data.compromised_count(), 3);

        // flattened across groups, deduplicated ("wert" appears in two groups)
        assert_eq!(data.keyboard_walk_count(), 6);

        // deduplicated preserving order ("login" appears in two groups)
        assert_eq!(data.contextual_word_count(), 5);
    }

    #[test]
    fn test_keyboard_walks_sorted_longest_first() {
        let data = ReferenceData::new(
            vec![],
            vec!["asdf".into(), "qwertyuiop".into(), "1qaz".into(), "qwerty".into()],
            vec![],
        );
        assert!(data.has_keyboard_walk("xxQWERTYuiopxx"));
        assert_eq!(data.keyboard_walks[0], "qwertyuiop");
        assert_eq!(data.keyboard_walks[1], "qwerty");
    }

    #[test]
    fn test_contextual_words_keep_first_seen_order() {
        let data = ReferenceData::new(
            vec![],
            vec![],
            vec!["Login".into(), "admin".into(), "LOGIN".into(), "welcome".into()],
        );
        assert_eq!(data.contextual_words, vec!["login", "admin", "welcome"]);
    }

    #[test]
    fn test_substring_queries() {
        let data = ReferenceData::from_json(sample_json()).unwrap();

        assert!(data.has_keyboard_walk("myQwErTy99"));
        assert!(!data.has_keyboard_walk("tr0ub4dor&3"));

        assert!(data.has_contextual_word("SuperAdmin2024"));
        assert!(!data.has_contextual_word("tr0ub4dor&3"));
    }

    #[test]
    #[serial]
    fn test_init_blocklist_file_not_found() {
        reset_blocklist_for_testing();
        set_env("PWD_BLOCKLIST_PATH", "/nonexistent/path/blocklist.json");

        let result = init_blocklist();
        assert!(matches!(result, Err(BlocklistError::FileNotFound(_))));

        remove_env("PWD_BLOCKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_blocklist_success_and_idempotent() {
        reset_blocklist_for_testing();
        let temp_file = setup_with_tempfile(sample_json());
        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_BLOCKLIST_PATH", path);

        let first = init_blocklist().expect("first init should succeed");
        assert!(first.is_compromised("letmein"));

        // Second init must return the same snapshot without reloading,
        // even if the path no longer resolves.
        set_env("PWD_BLOCKLIST_PATH", "/nonexistent/path/blocklist.json");
        let second = init_blocklist().expect("second init should hit the cache");
        assert!(Arc::ptr_eq(&first, &second));

        let cached = reference_data().expect("cache should be populated");
        assert!(Arc::ptr_eq(&first, &cached));

        remove_env("PWD_BLOCKLIST_PATH");
        reset_blocklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_reference_data_none_before_init() {
        reset_blocklist_for_testing();
        assert!(reference_data().is_none());
    }
}
