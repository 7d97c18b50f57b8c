//! Guessable letters
//!
//! A `Letter` is a single uppercase ASCII letter A-Z. The alphabet is the
//! fixed, ordered set of all 26 letters.

use std::fmt;

/// A single guessable letter (A-Z)
///
/// Stored as the uppercase ASCII byte. Lowercase input is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// All 26 letters in alphabetical order
pub const ALPHABET: [Letter; 26] = {
    let mut letters = [Letter(b'A'); 26];
    let mut i = 0;
    while i < 26 {
        letters[i] = Letter(b'A' + i as u8);
        i += 1;
    }
    letters
};

/// Error type for characters outside the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterError(pub char);

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a letter from A to Z", self.0)
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character
    ///
    /// # Errors
    /// Returns `LetterError` if the character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    ///
    /// assert!(Letter::new('3').is_err());
    /// assert!(Letter::new('É').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError(ch))
        }
    }

    /// Create a letter from an uppercase ASCII byte
    ///
    /// Only used where the byte is already known to be A-Z.
    #[inline]
    pub(crate) const fn from_upper_byte(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_uppercase(), "Letter byte must be A-Z");
        Self(byte)
    }

    /// The uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl std::str::FromStr for Letter {
    type Err = LetterError;

    /// Parse a single-character string, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            (Some(_), Some(extra)) => Err(LetterError(extra)),
            (None, _) => Err(LetterError(' ')),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_ordered_a_to_z() {
        let text: String = ALPHABET.iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn alphabet_indices_match_positions() {
        for (i, letter) in ALPHABET.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn letter_lowercase_normalized() {
        assert_eq!(Letter::new('a').unwrap(), Letter::new('A').unwrap());
        assert_eq!(Letter::new('z').unwrap().as_char(), 'Z');
    }

    #[test]
    fn letter_rejects_non_alphabet() {
        assert_eq!(Letter::new('1'), Err(LetterError('1')));
        assert_eq!(Letter::new(' '), Err(LetterError(' ')));
        assert_eq!(Letter::new('Ç'), Err(LetterError('Ç')));
        assert_eq!(Letter::new('_'), Err(LetterError('_')));
    }

    #[test]
    fn letter_from_str() {
        assert_eq!(" k ".parse::<Letter>().unwrap().as_char(), 'K');
        assert!("".parse::<Letter>().is_err());
        assert!("ab".parse::<Letter>().is_err());
        assert!("7".parse::<Letter>().is_err());
    }

    #[test]
    fn letter_display() {
        let letter = Letter::new('m').unwrap();
        assert_eq!(format!("{letter}"), "M");
    }
}
