//! Word lists for hangman
//!
//! Provides the embedded default vocabulary and selection of a custom list.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Vocabulary, VocabularyError};
use loader::{load_from_file, words_from_slice};

/// Name that selects the embedded list on the command line
pub const EMBEDDED: &str = "embedded";

/// The built-in vocabulary
///
/// # Panics
/// Will not panic - the build script rejects an empty or invalid word list.
#[must_use]
pub fn embedded_vocabulary() -> Vocabulary {
    Vocabulary::new(words_from_slice(WORDS)).expect("embedded word list validated at build time")
}

/// Resolve a `--wordlist` argument: "embedded" or a path to a word list file
///
/// # Errors
///
/// Returns a `VocabularyError` if the file cannot be read or holds no valid words.
pub fn load_vocabulary(source: &str) -> Result<Vocabulary, VocabularyError> {
    if source.eq_ignore_ascii_case(EMBEDDED) {
        Ok(embedded_vocabulary())
    } else {
        load_from_file(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty word in embedded list");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_vocabulary_keeps_every_word() {
        assert_eq!(embedded_vocabulary().len(), WORDS_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 42, "Expected 42 embedded words");
    }

    #[test]
    fn load_vocabulary_embedded_name() {
        assert_eq!(load_vocabulary("embedded").unwrap(), embedded_vocabulary());
        assert_eq!(load_vocabulary("EMBEDDED").unwrap(), embedded_vocabulary());
    }

    #[test]
    fn load_vocabulary_missing_path() {
        assert!(matches!(
            load_vocabulary("no/such/list.txt"),
            Err(VocabularyError::Io(_))
        ));
    }
}
