//! Hangman word representation
//!
//! A Word stores an uppercase word along with a bitmask of the letters it contains.

use super::Letter;
use std::fmt;

/// An uppercase word made only of letters A-Z
///
/// Stores the text and a 26-bit set of the distinct letters for O(1) membership tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letter_mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter { ch: char, position: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter { ch, position } => {
                write!(
                    f,
                    "Word contains '{ch}' at position {}, only letters A-Z are allowed",
                    position + 1
                )
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Bit for a letter within a 26-bit letter set
#[inline]
pub(crate) const fn letter_bit(letter: Letter) -> u32 {
    1 << letter.index()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("zebra").unwrap();
    /// assert_eq!(word.text(), "ZEBRA");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("ice cream").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let mut letter_mask = 0;
        for (position, ch) in text.chars().enumerate() {
            if !ch.is_ascii_uppercase() {
                return Err(WordError::InvalidCharacter { ch, position });
            }
            letter_mask |= letter_bit(Letter::from_upper_byte(ch as u8));
        }

        Ok(Self { text, letter_mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters in position order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(Letter::from_upper_byte)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.letter_mask & letter_bit(letter) != 0
    }

    /// The set of distinct letters as a 26-bit mask (bit 0 = A)
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letter_mask
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
