//! Hangman game state machine
//!
//! A `GameState` is an immutable snapshot of one game. Guessing a letter
//! produces a new snapshot; the previous one is left untouched.
//!
//! States: `Playing` (initial) → `Won` | `Lost` (terminal). The only way out of
//! a terminal state is to start a new game.

use super::word::letter_bit;
use super::{ALPHABET, Letter, Vocabulary, Word};
use rand::Rng;
use std::fmt;

/// Default number of wrong guesses allowed per game
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Placeholder shown for letters that have not been guessed yet
pub const MASK_CHAR: char = '_';

/// Outcome status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "Playing"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

/// What a guess does (or would do) to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word and gets revealed
    Correct,
    /// Letter is not in the word and costs one attempt
    Incorrect,
    /// Letter was guessed before; nothing changes
    AlreadyGuessed,
    /// Game is over; nothing changes
    GameOver,
}

impl GuessOutcome {
    /// Whether the guess changes the game state
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Correct | Self::Incorrect)
    }
}

/// Error type for games that cannot be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The attempt budget must be at least 1
    ZeroAttempts,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAttempts => write!(f, "A game needs at least one attempt"),
        }
    }
}

impl std::error::Error for GameError {}

/// Guessed letters split by whether they occur in the secret word
///
/// Both lists keep guess order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBuckets {
    pub correct: Vec<Letter>,
    pub incorrect: Vec<Letter>,
}

/// Snapshot of a single hangman game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret_word: Word,
    guessed_letters: Vec<Letter>,
    guessed_mask: u32,
    remaining_attempts: u32,
    max_attempts: u32,
    status: GameStatus,
}

impl GameState {
    /// Start a new game with a word picked uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::ZeroAttempts` if `max_attempts` is 0.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GameStatus, Vocabulary};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let vocabulary = Vocabulary::from_strs(&["dog"]).unwrap();
    /// let game = GameState::new_game(&vocabulary, 6, &mut StdRng::seed_from_u64(1)).unwrap();
    ///
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// assert_eq!(game.remaining_attempts(), 6);
    /// assert_eq!(game.masked_word(), "___");
    /// ```
    pub fn new_game<R: Rng + ?Sized>(
        vocabulary: &Vocabulary,
        max_attempts: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        Self::with_word(vocabulary.choose(rng).clone(), max_attempts)
    }

    /// Start a new game with a known secret word
    ///
    /// # Errors
    /// Returns `GameError::ZeroAttempts` if `max_attempts` is 0.
    pub fn with_word(secret_word: Word, max_attempts: u32) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::ZeroAttempts);
        }

        Ok(Self {
            secret_word,
            guessed_letters: Vec::new(),
            guessed_mask: 0,
            remaining_attempts: max_attempts,
            max_attempts,
            status: GameStatus::Playing,
        })
    }

    /// Classify a guess without applying it
    #[must_use]
    pub const fn evaluate_guess(&self, letter: Letter) -> GuessOutcome {
        if self.status.is_terminal() {
            GuessOutcome::GameOver
        } else if self.is_guessed(letter) {
            GuessOutcome::AlreadyGuessed
        } else if self.secret_word.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect
        }
    }

    /// Guess a letter, returning the next snapshot
    ///
    /// Repeated letters and guesses after the game ended return an identical
    /// snapshot. Otherwise the letter is recorded, a miss costs one attempt, and
    /// the outcome is evaluated win first: completing the word wins even if the
    /// same step would have exhausted the attempts.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GameStatus, Letter, Word};
    ///
    /// let game = GameState::with_word(Word::new("GO").unwrap(), 1).unwrap();
    /// let game = game.guess_letter(Letter::new('G').unwrap());
    /// let game = game.guess_letter(Letter::new('O').unwrap());
    ///
    /// assert_eq!(game.status(), GameStatus::Won);
    /// assert_eq!(game.remaining_attempts(), 1);
    /// ```
    #[must_use]
    pub fn guess_letter(&self, letter: Letter) -> Self {
        let mut next = self.clone();
        next.apply_guess(letter);
        next
    }

    fn apply_guess(&mut self, letter: Letter) {
        let outcome = self.evaluate_guess(letter);
        if !outcome.is_accepted() {
            return;
        }

        self.guessed_letters.push(letter);
        self.guessed_mask |= letter_bit(letter);

        if outcome == GuessOutcome::Incorrect {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        }

        // Read post-update values: win takes precedence over loss
        if self.is_word_revealed() {
            self.status = GameStatus::Won;
        } else if self.remaining_attempts == 0 {
            self.status = GameStatus::Lost;
        }
    }

    fn is_word_revealed(&self) -> bool {
        self.secret_word.letter_mask() & !self.guessed_mask == 0
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended (won or lost)
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Attempts left before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// The attempt budget the game started with
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Number of wrong guesses made so far
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.max_attempts - self.remaining_attempts
    }

    /// Letters guessed so far, in guess order
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed_letters
    }

    /// Whether a letter has already been guessed
    #[inline]
    #[must_use]
    pub const fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed_mask & letter_bit(letter) != 0
    }

    /// Letters that can still be guessed, in alphabetical order
    pub fn available_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        ALPHABET
            .into_iter()
            .filter(move |&letter| !self.is_guessed(letter))
    }

    /// The secret word
    ///
    /// Front ends should show it through [`GameState::revealed_word`], which
    /// hides it while the game is in progress.
    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret_word
    }

    /// The secret word once the game has ended, `None` while playing
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        self.is_over().then(|| self.secret_word.text())
    }

    /// The secret word with unguessed letters replaced by `_`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, Letter, Word};
    ///
    /// let game = GameState::with_word(Word::new("CAT").unwrap(), 6).unwrap();
    /// let game = game.guess_letter(Letter::new('A').unwrap());
    ///
    /// assert_eq!(game.masked_word(), "_A_");
    /// assert_eq!(game.masked_word_with(" "), "_ A _");
    /// ```
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.masked_chars().collect()
    }

    /// The masked word with a separator between positions
    #[must_use]
    pub fn masked_word_with(&self, separator: &str) -> String {
        self.masked_chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn masked_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.secret_word.letters().map(|letter| {
            if self.is_guessed(letter) {
                letter.as_char()
            } else {
                MASK_CHAR
            }
        })
    }

    /// Split guessed letters into hits and misses, each in guess order
    #[must_use]
    pub fn letter_buckets(&self) -> LetterBuckets {
        let (correct, incorrect) = self
            .guessed_letters
            .iter()
            .copied()
            .partition(|&letter| self.secret_word.contains(letter));

        LetterBuckets { correct, incorrect }
    }
}
