//! Hangman
//!
//! A hangman word-guessing game: the game state machine, word lists, a terminal
//! UI, a simple line-based CLI and a simulator for automated players.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GameStatus, Letter, Vocabulary};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let vocabulary = Vocabulary::from_strs(&["dog"]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let mut game = GameState::new_game(&vocabulary, 6, &mut rng).unwrap();
//! for ch in ['D', 'O', 'G'] {
//!     game = game.guess_letter(Letter::new(ch).unwrap());
//! }
//!
//! assert_eq!(game.masked_word(), "DOG");
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Automated guessing strategies
pub mod players;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod logging;
