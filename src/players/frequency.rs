//! Letter-frequency player
//!
//! Keeps only the vocabulary words that fit the board and guesses the unguessed
//! letter that occurs in the most of them.

use super::Player;
use crate::core::{GameState, Letter, MASK_CHAR, Vocabulary, Word};
use rand::Rng;
use rustc_hash::FxHashMap;

/// English letter order by frequency, used when no vocabulary word fits
const FALLBACK_ORDER: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Picks the letter present in the most candidate words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyPlayer;

/// Check whether a word could be the secret word given the board
///
/// A revealed position must match exactly. A hidden position cannot hold a
/// letter that was already guessed, since guessing reveals every occurrence.
#[must_use]
pub fn is_consistent(word: &Word, game: &GameState) -> bool {
    let masked = game.masked_word();

    word.len() == masked.len()
        && word.letters().zip(masked.chars()).all(|(letter, shown)| {
            if shown == MASK_CHAR {
                !game.is_guessed(letter)
            } else {
                letter.as_char() == shown
            }
        })
}

/// Vocabulary words consistent with the board
#[must_use]
pub fn candidate_words<'a>(game: &GameState, vocabulary: &'a Vocabulary) -> Vec<&'a Word> {
    vocabulary
        .words()
        .iter()
        .filter(|word| is_consistent(word, game))
        .collect()
}

impl FrequencyPlayer {
    /// Count, for each unguessed letter, how many candidates contain it
    fn letter_counts(game: &GameState, candidates: &[&Word]) -> FxHashMap<Letter, usize> {
        let mut counts: FxHashMap<Letter, usize> = FxHashMap::default();

        for word in candidates {
            for letter in game.available_letters() {
                if word.contains(letter) {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        counts
    }

    fn fallback(game: &GameState) -> Option<Letter> {
        FALLBACK_ORDER
            .iter()
            .filter_map(|&b| Letter::new(b as char).ok())
            .find(|&letter| !game.is_guessed(letter))
    }
}

impl Player for FrequencyPlayer {
    fn next_guess<R: Rng + ?Sized>(
        &self,
        game: &GameState,
        vocabulary: &Vocabulary,
        _rng: &mut R,
    ) -> Option<Letter> {
        let candidates = candidate_words(game, vocabulary);
        let counts = Self::letter_counts(game, &candidates);

        // Highest count wins; ties go to the earlier letter
        counts
            .into_iter()
            .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then_with(|| lb.cmp(la)))
            .map(|(letter, _)| letter)
            .or_else(|| Self::fallback(game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn game(word: &str, guesses: &str) -> GameState {
        guesses.chars().fold(
            GameState::with_word(Word::new(word).unwrap(), 6).unwrap(),
            |acc, ch| acc.guess_letter(letter(ch)),
        )
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn consistency_uses_length() {
        let state = game("KIWI", "");
        assert!(is_consistent(&word("RAIO"), &state));
        assert!(!is_consistent(&word("OVO"), &state));
    }

    #[test]
    fn consistency_requires_revealed_letters() {
        let state = game("KIWI", "I");
        assert!(is_consistent(&word("KIWI"), &state));
        assert!(!is_consistent(&word("RAIO"), &state)); // _I_I does not fit R A I O
    }

    #[test]
    fn consistency_excludes_missed_letters() {
        let state = game("KIWI", "Z");
        assert!(is_consistent(&word("KIWI"), &state));
        assert!(!is_consistent(&word("ZUMB"), &state));
    }

    #[test]
    fn consistency_excludes_hidden_guessed_letter() {
        // OVO with O guessed shows O_O; "OOO" would have revealed the middle too
        let state = game("OVO", "O");
        assert!(is_consistent(&word("OVO"), &state));
        assert!(!is_consistent(&word("OOO"), &state));
    }

    #[test]
    fn candidates_filter_vocabulary() {
        let vocabulary = Vocabulary::from_strs(&["KIWI", "RAIO", "OVO", "VENTO"]).unwrap();
        let state = game("KIWI", "");
        let texts: Vec<&str> = candidate_words(&state, &vocabulary)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(texts, vec!["KIWI", "RAIO"]);
    }

    #[test]
    fn picks_most_common_letter() {
        // I occurs in both 4-letter candidates
        let vocabulary = Vocabulary::from_strs(&["KIWI", "RAIO", "OVO"]).unwrap();
        let state = game("KIWI", "");
        let mut rng = StdRng::seed_from_u64(0);

        let guess = FrequencyPlayer.next_guess(&state, &vocabulary, &mut rng);
        assert_eq!(guess, Some(letter('I')));
    }

    #[test]
    fn ties_go_to_earlier_letter() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let state = game("DOG", "");
        let mut rng = StdRng::seed_from_u64(0);

        let guess = FrequencyPlayer.next_guess(&state, &vocabulary, &mut rng);
        assert_eq!(guess, Some(letter('D')));
    }

    #[test]
    fn falls_back_when_no_candidate_fits() {
        let vocabulary = Vocabulary::from_strs(&["ZEBRA"]).unwrap();
        let state = game("DOG", "");
        let mut rng = StdRng::seed_from_u64(0);

        let guess = FrequencyPlayer.next_guess(&state, &vocabulary, &mut rng);
        assert_eq!(guess, Some(letter('E')));
    }

    #[test]
    fn solves_single_word_vocabulary_without_misses() {
        let vocabulary = Vocabulary::from_strs(&["CHOCOLATE"]).unwrap();
        let state = GameState::with_word(word("CHOCOLATE"), 1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let end = crate::players::play_out(&FrequencyPlayer, state, &vocabulary, &mut rng);
        assert_eq!(end.status(), crate::core::GameStatus::Won);
        assert_eq!(end.wrong_guesses(), 0);
    }
}
