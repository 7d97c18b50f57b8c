//! Word list loading utilities
//!
//! Provides functions to load vocabularies from files or from embedded constants.

use crate::core::{Vocabulary, VocabularyError, Word};
use std::fs;
use std::path::Path;

/// Load a vocabulary from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be read,
/// `VocabularyError::InvalidWord` for the first bad line, or
/// `VocabularyError::Empty` if the file holds no words.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, VocabularyError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

/// Parse word list text in the file format
///
/// # Errors
///
/// Same as [`load_from_file`], minus I/O.
pub fn parse_word_list(content: &str) -> Result<Vocabulary, VocabularyError> {
    let mut words = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let word = Word::new(trimmed)
            .map_err(|source| VocabularyError::InvalidWord { line: i + 1, source })?;
        words.push(word);
    }

    Vocabulary::new(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["zebra", "KIWI", "Ovo"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "ZEBRA");
        assert_eq!(words[1].text(), "KIWI");
        assert_eq!(words[2].text(), "OVO");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["zebra", "two words", "", "r2d2", "kiwi"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ZEBRA");
        assert_eq!(words[1].text(), "KIWI");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let content = "# animals\nzebra\n\n   girafa  \n# fruit\nkiwi\n";
        let vocabulary = parse_word_list(content).unwrap();

        let texts: Vec<&str> = vocabulary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ZEBRA", "GIRAFA", "KIWI"]);
    }

    #[test]
    fn parse_reports_line_of_bad_word() {
        let content = "zebra\n\nice cream\n";
        let err = parse_word_list(content).unwrap_err();
        assert!(matches!(err, VocabularyError::InvalidWord { line: 3, .. }));
    }

    #[test]
    fn parse_rejects_empty_file() {
        assert!(matches!(parse_word_list(""), Err(VocabularyError::Empty)));
        assert!(matches!(
            parse_word_list("# only comments\n\n"),
            Err(VocabularyError::Empty)
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("definitely/not/a/real/wordlist.txt").unwrap_err();
        assert!(matches!(err, VocabularyError::Io(_)));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("hangman-loader-{}.txt", std::process::id()));
        fs::write(&path, "dog\ncat\n").unwrap();

        let vocabulary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.words()[0].text(), "DOG");
    }
}
