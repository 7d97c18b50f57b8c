//! Automated players
//!
//! Guessing strategies used by the simulator. A player only sees what a human
//! sees: the masked word, the guessed letters and the vocabulary.

mod frequency;
mod simple;

pub use frequency::{FrequencyPlayer, candidate_words, is_consistent};
pub use simple::{AlphabeticalPlayer, RandomPlayer};

use crate::core::{GameState, Letter, Vocabulary};
use rand::Rng;

/// A strategy for choosing the next letter to guess
pub trait Player {
    /// Choose the next letter
    ///
    /// Returns a letter that has not been guessed yet, or `None` if none remain.
    fn next_guess<R: Rng + ?Sized>(
        &self,
        game: &GameState,
        vocabulary: &Vocabulary,
        rng: &mut R,
    ) -> Option<Letter>;
}

/// Enum wrapper for all player types
///
/// Allows runtime selection of a player while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    /// Most common letter among words still consistent with the board (default)
    Frequency(FrequencyPlayer),
    /// Letters in A-Z order
    Alphabetical(AlphabeticalPlayer),
    /// Uniformly random unguessed letter
    Random(RandomPlayer),
}

impl Player for PlayerType {
    fn next_guess<R: Rng + ?Sized>(
        &self,
        game: &GameState,
        vocabulary: &Vocabulary,
        rng: &mut R,
    ) -> Option<Letter> {
        match self {
            Self::Frequency(p) => p.next_guess(game, vocabulary, rng),
            Self::Alphabetical(p) => p.next_guess(game, vocabulary, rng),
            Self::Random(p) => p.next_guess(game, vocabulary, rng),
        }
    }
}

impl PlayerType {
    /// Look up a player by name
    ///
    /// Supported names: "frequency", "alphabetical" (or "abc"), "random".
    #[must_use]
    pub fn try_from_name(name: &str) -> Option<Self> {
        match name {
            "frequency" => Some(Self::Frequency(FrequencyPlayer)),
            "alphabetical" | "abc" => Some(Self::Alphabetical(AlphabeticalPlayer)),
            "random" => Some(Self::Random(RandomPlayer)),
            _ => None,
        }
    }

    /// Create a player from its name
    ///
    /// Defaults to frequency if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or(Self::Frequency(FrequencyPlayer))
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

/// Play one game to the end with a player
///
/// Stops early only if the player has no letter left to offer.
pub fn play_out<P: Player, R: Rng + ?Sized>(
    player: &P,
    mut game: GameState,
    vocabulary: &Vocabulary,
    rng: &mut R,
) -> GameState {
    while !game.is_over() {
        let Some(letter) = player.next_guess(&game, vocabulary, rng) else {
            break;
        };
        game = game.guess_letter(letter);
    }
    game
}
