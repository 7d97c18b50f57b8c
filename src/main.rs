//! Hangman - CLI
//!
//! Hangman with TUI and CLI modes, plus a simulator for automated players.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::{DEFAULT_MAX_ATTEMPTS, Vocabulary},
    logging::init_logging,
    output::print_simulation_result,
    players::PlayerType,
    wordlists::load_vocabulary,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed before the game is lost
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_attempts: u32,

    /// Seed for word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play many games automatically and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Player: frequency (default), alphabetical, random
        #[arg(short, long, default_value = "frequency")]
        player: String,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let vocabulary = load_vocabulary(&cli.wordlist)
        .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;
    tracing::debug!(words = vocabulary.len(), source = %cli.wordlist, "vocabulary loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&vocabulary, cli.max_attempts, cli.seed),
        Commands::Simple => {
            let mut rng = make_rng(cli.seed);
            run_simple(&vocabulary, cli.max_attempts, &mut rng)
        }
        Commands::Simulate { games, player } => {
            run_simulate_command(&vocabulary, cli.max_attempts, cli.seed, games, &player)
        }
    }
}

fn run_play_command(vocabulary: &Vocabulary, max_attempts: u32, seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(vocabulary, max_attempts, make_rng(seed))?;
    run_tui(app)
}

fn run_simulate_command(
    vocabulary: &Vocabulary,
    max_attempts: u32,
    seed: Option<u64>,
    games: usize,
    player_name: &str,
) -> Result<()> {
    let player = PlayerType::try_from_name(player_name).unwrap_or_else(|| {
        let fallback = PlayerType::from_name(player_name);
        tracing::warn!(requested = player_name, using = fallback.name(), "unknown player");
        fallback
    });

    let seed = seed.unwrap_or_else(|| rand::rng().random());

    println!(
        "Simulating {games} games with the {} player ({} words, {max_attempts} attempts, seed {seed})...",
        player.name(),
        vocabulary.len()
    );

    let config = SimulationConfig {
        player,
        games,
        max_attempts,
        seed,
        show_progress: true,
    };
    let result = run_simulation(&config, vocabulary)?;
    print_simulation_result(&result);
    Ok(())
}
