//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI

use crate::core::{GameState, GuessOutcome, Letter, Vocabulary};
use crate::output::formatters::outcome_message;
use crate::output::{print_board, print_outcome};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(Letter),
    NewGame,
    Quit,
    Invalid(String),
}

/// Interpret one line of input
///
/// A single character is a guess; `new`/`n!` restarts; `quit`/`q!`/`exit` leaves.
#[must_use]
pub fn parse_input(input: &str) -> SimpleCommand {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "quit" | "q!" | "exit" => SimpleCommand::Quit,
        "new" | "n!" | "restart" => SimpleCommand::NewGame,
        "" => SimpleCommand::Invalid("Type a letter to guess".to_string()),
        _ => match input.parse::<Letter>() {
            Ok(letter) => SimpleCommand::Guess(letter),
            Err(err) if input.chars().count() == 1 => SimpleCommand::Invalid(err.to_string()),
            Err(_) => SimpleCommand::Invalid(format!("'{input}' is not a single letter")),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a game
/// cannot be created with `max_attempts`.
pub fn run_simple<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    max_attempts: u32,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Hangman - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("You can miss {max_attempts} times before the game is lost.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = GameState::new_game(vocabulary, max_attempts, rng)?;
    tracing::info!(letters = game.secret_word().len(), "new game");

    loop {
        print_board(&game);

        if game.is_over() {
            print_outcome(&game);
            tracing::info!(status = %game.status(), word = game.secret_word().text(), "game over");

            // Closed input counts as "no"
            match get_user_input("\nPlay again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game = GameState::new_game(vocabulary, max_attempts, rng)?;
                    tracing::info!(letters = game.secret_word().len(), "new game");
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        match next_command(get_user_input("\nGuess a letter")?) {
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::NewGame => {
                game = GameState::new_game(vocabulary, max_attempts, rng)?;
                tracing::info!(letters = game.secret_word().len(), "new game");
                println!("\n🔄 New game started!");
            }
            SimpleCommand::Guess(letter) => {
                let outcome = game.evaluate_guess(letter);
                tracing::debug!(%letter, ?outcome, "guess");

                let message = outcome_message(letter, outcome);
                match outcome {
                    GuessOutcome::Correct => println!("{}", message.green()),
                    GuessOutcome::Incorrect => println!("{}", message.red()),
                    GuessOutcome::AlreadyGuessed | GuessOutcome::GameOver => {
                        println!("{}", message.yellow());
                    }
                }

                game = game.guess_letter(letter);
            }
            SimpleCommand::Invalid(reason) => {
                tracing::warn!(%reason, "rejected input");
                println!("{}", format!("❌ {reason}").red());
            }
        }
    }
}

/// Interpret a line read at the guess prompt; end of input quits
#[must_use]
pub fn next_command(line: Option<String>) -> SimpleCommand {
    line.map_or(SimpleCommand::Quit, |line| parse_input(&line))
}

/// Read one trimmed line, or `None` at end of input
fn read_trimmed_line<B: BufRead>(reader: &mut B) -> Result<Option<String>> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    read_trimmed_line(&mut io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn parse_single_letter() {
        assert_eq!(parse_input("a"), SimpleCommand::Guess(letter('A')));
        assert_eq!(parse_input("  Z \n"), SimpleCommand::Guess(letter('Z')));
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("quit"), SimpleCommand::Quit);
        assert_eq!(parse_input("EXIT"), SimpleCommand::Quit);
        assert_eq!(parse_input("new"), SimpleCommand::NewGame);
        assert_eq!(parse_input("n!"), SimpleCommand::NewGame);
    }

    #[test]
    fn end_of_input_quits() {
        let mut closed: &[u8] = b"";
        let line = read_trimmed_line(&mut closed).unwrap();
        assert_eq!(line, None);
        assert_eq!(next_command(line), SimpleCommand::Quit);
    }

    #[test]
    fn lines_are_read_one_at_a_time() {
        let mut input: &[u8] = b"  q \nnew\n";
        assert_eq!(
            next_command(read_trimmed_line(&mut input).unwrap()),
            SimpleCommand::Guess(letter('Q'))
        );
        assert_eq!(
            next_command(read_trimmed_line(&mut input).unwrap()),
            SimpleCommand::NewGame
        );
        assert_eq!(read_trimmed_line(&mut input).unwrap(), None);
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            parse_input("7"),
            SimpleCommand::Invalid("'7' is not a letter from A to Z".to_string())
        );
        assert_eq!(
            parse_input("ab"),
            SimpleCommand::Invalid("'ab' is not a single letter".to_string())
        );
        assert!(matches!(parse_input(""), SimpleCommand::Invalid(_)));
    }
}
