//! Core domain types for hangman
//!
//! This module contains the game rules with no I/O. Every type here is plain
//! data; randomness is injected by the caller.

mod game;
mod letter;
mod vocabulary;
mod word;

pub use game::{
    DEFAULT_MAX_ATTEMPTS, GameError, GameState, GameStatus, GuessOutcome, LetterBuckets,
    MASK_CHAR,
};
pub use letter::{ALPHABET, Letter, LetterError};
pub use vocabulary::{Vocabulary, VocabularyError};
pub use word::{Word, WordError};
