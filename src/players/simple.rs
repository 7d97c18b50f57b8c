//! Baseline players that ignore the vocabulary

use super::Player;
use crate::core::{GameState, Letter, Vocabulary};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Guesses letters in alphabetical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabeticalPlayer;

impl Player for AlphabeticalPlayer {
    fn next_guess<R: Rng + ?Sized>(
        &self,
        game: &GameState,
        _vocabulary: &Vocabulary,
        _rng: &mut R,
    ) -> Option<Letter> {
        game.available_letters().next()
    }
}

/// Guesses a uniformly random unguessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn next_guess<R: Rng + ?Sized>(
        &self,
        game: &GameState,
        _vocabulary: &Vocabulary,
        rng: &mut R,
    ) -> Option<Letter> {
        let available: Vec<Letter> = game.available_letters().collect();
        available.choose(rng).copied()
    }
}
