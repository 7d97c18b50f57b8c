//! The fixed set of words a game can be played with

use super::{Word, WordError};
use rand::Rng;
use std::fmt;

/// A non-empty, ordered, read-only list of words
///
/// Duplicates are allowed; they only raise the chance of that word being picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

/// Error type for vocabularies that cannot be used
#[derive(Debug)]
pub enum VocabularyError {
    /// No words were supplied
    Empty,
    /// An entry is not a valid word (line numbers are 1-based)
    InvalidWord { line: usize, source: WordError },
    /// The word list file could not be read
    Io(std::io::Error),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Vocabulary must contain at least one word"),
            Self::InvalidWord { line, source } => write!(f, "Invalid word on line {line}: {source}"),
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::InvalidWord { source, .. } => Some(source),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for VocabularyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl Vocabulary {
    /// Build a vocabulary from already validated words
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { words })
    }

    /// Build a vocabulary from raw strings, validating each one
    ///
    /// # Errors
    /// Returns `VocabularyError::InvalidWord` for the first entry that is not a
    /// valid word, or `VocabularyError::Empty` if there are no entries.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_strs(&["dog", "cat"]).unwrap();
    /// assert_eq!(vocabulary.len(), 2);
    /// assert!(Vocabulary::from_strs(&[]).is_err());
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, VocabularyError> {
        let words = words
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                Word::new(s).map_err(|source| VocabularyError::InvalidWord { line: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// All words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words (always at least 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty vocabularies
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the word at an index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Check whether a word is part of the vocabulary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
