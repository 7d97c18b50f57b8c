//! Simulate command
//!
//! Plays many automated games in parallel and reports how a player performs.

use crate::core::{GameError, GameState, GameStatus, Vocabulary};
use crate::players::{Player, PlayerType, play_out};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub player: PlayerType,
    pub games: usize,
    pub max_attempts: u32,
    /// Base seed; game `i` uses a generator derived from `seed` and `i`
    pub seed: u64,
    pub show_progress: bool,
}

/// Aggregate result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub player: &'static str,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub max_attempts: u32,
    pub average_wrong_guesses: f64,
    /// Wrong guesses per game → number of games
    pub distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Fraction of games won (0.0 when no games were played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Seed for one game, independent of the order games run in
const fn game_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Play a single seeded game to the end
fn simulate_game<P: Player>(
    player: &P,
    vocabulary: &Vocabulary,
    max_attempts: u32,
    seed: u64,
) -> Result<GameState, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let game = GameState::new_game(vocabulary, max_attempts, &mut rng)?;
    Ok(play_out(player, game, vocabulary, &mut rng))
}

/// Run a simulation
///
/// Results are identical for the same config regardless of thread count.
///
/// # Errors
///
/// Returns `GameError::ZeroAttempts` if `max_attempts` is 0.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(
    config: &SimulationConfig,
    vocabulary: &Vocabulary,
) -> Result<SimulationResult, GameError> {
    tracing::info!(
        player = config.player.name(),
        games = config.games,
        max_attempts = config.max_attempts,
        seed = config.seed,
        "starting simulation"
    );

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let finished: Vec<GameState> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let seed = game_seed(config.seed, index);
            let result = simulate_game(&config.player, vocabulary, config.max_attempts, seed);
            pb.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut wins = 0;
    let mut total_wrong = 0u64;
    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();

    for game in &finished {
        if game.status() == GameStatus::Won {
            wins += 1;
        }
        total_wrong += u64::from(game.wrong_guesses());
        *distribution.entry(game.wrong_guesses()).or_insert(0) += 1;
    }

    let games = finished.len();
    let result = SimulationResult {
        player: config.player.name(),
        games,
        wins,
        losses: games - wins,
        max_attempts: config.max_attempts,
        average_wrong_guesses: if games == 0 {
            0.0
        } else {
            total_wrong as f64 / games as f64
        },
        distribution,
        duration,
    };

    tracing::info!(
        wins = result.wins,
        losses = result.losses,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    Ok(result)
}
