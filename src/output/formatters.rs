//! Formatting utilities for terminal output

use crate::core::{ALPHABET, GameState, GuessOutcome, Letter};

/// Body parts added to the gallows, one per wrong guess at the default budget
pub const BODY_PARTS: [&str; 6] = [
    "Head",
    "Body",
    "Right arm",
    "Left arm",
    "Right leg",
    "Left leg",
];

/// Number of body parts to draw for a game
///
/// Scales to the attempt budget so a lost game always shows the full figure.
#[must_use]
pub fn parts_shown(game: &GameState) -> usize {
    let wrong = game.wrong_guesses() as usize;
    let max = game.max_attempts() as usize;
    (wrong * BODY_PARTS.len()).div_ceil(max).min(BODY_PARTS.len())
}

/// Draw the gallows as ASCII art lines
#[must_use]
pub fn gallows_lines(parts: usize) -> Vec<String> {
    let part = |index: usize, glyph: char| if parts > index { glyph } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  |   {}", part(0, 'O')),
        format!("  |  {}{}{}", part(3, '/'), part(1, '|'), part(2, '\\')),
        format!("  |  {} {}", part(5, '/'), part(4, '\\')),
        "  |".to_string(),
        "=====".to_string(),
    ]
}

/// Join letters with a comma, as shown in the used-letters panel
#[must_use]
pub fn letters_list(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The alphabet with guessed letters replaced by a dot
#[must_use]
pub fn keyboard_line(game: &GameState) -> String {
    ALPHABET
        .iter()
        .map(|&letter| {
            if game.is_guessed(letter) {
                '·'
            } else {
                letter.as_char()
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback line for an evaluated guess
#[must_use]
pub fn outcome_message(letter: Letter, outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Correct => format!("✓ {letter} is in the word!"),
        GuessOutcome::Incorrect => format!("✗ {letter} is not in the word"),
        GuessOutcome::AlreadyGuessed => format!("You already tried {letter}"),
        GuessOutcome::GameOver => "The game is over".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of remaining attempts
#[must_use]
pub fn attempts_bar(game: &GameState, width: usize) -> String {
    create_progress_bar(
        f64::from(game.remaining_attempts()),
        f64::from(game.max_attempts()),
        width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn game(word: &str, max: u32, guesses: &str) -> GameState {
        guesses.chars().fold(
            GameState::with_word(Word::new(word).unwrap(), max).unwrap(),
            |acc, ch| acc.guess_letter(Letter::new(ch).unwrap()),
        )
    }

    #[test]
    fn parts_shown_default_budget_one_per_miss() {
        assert_eq!(parts_shown(&game("DOG", 6, "")), 0);
        assert_eq!(parts_shown(&game("DOG", 6, "X")), 1);
        assert_eq!(parts_shown(&game("DOG", 6, "XYZ")), 3);
        assert_eq!(parts_shown(&game("DOG", 6, "QWXYZU")), 6);
    }

    #[test]
    fn parts_shown_scales_to_budget() {
        assert_eq!(parts_shown(&game("DOG", 2, "X")), 3);
        assert_eq!(parts_shown(&game("DOG", 2, "XY")), 6);
        assert_eq!(parts_shown(&game("DOG", 12, "X")), 1);
    }

    #[test]
    fn gallows_empty_and_full() {
        let empty = gallows_lines(0);
        assert_eq!(empty[2], "  |    ");
        assert_eq!(empty[3], "  |     ");

        let full = gallows_lines(6);
        assert_eq!(full[2], "  |   O");
        assert_eq!(full[3], "  |  /|\\");
        assert_eq!(full[4], "  |  / \\");
    }

    #[test]
    fn letters_list_joins_with_commas() {
        let state = game("ZEBRA", 6, "ZQE");
        assert_eq!(letters_list(state.guessed_letters()), "Z, Q, E");
        assert_eq!(letters_list(&[]), "");
    }

    #[test]
    fn keyboard_line_marks_guessed() {
        let state = game("ZEBRA", 6, "AC");
        assert!(keyboard_line(&state).starts_with("· B · D"));
    }

    #[test]
    fn outcome_messages() {
        let a = Letter::new('a').unwrap();
        assert_eq!(outcome_message(a, GuessOutcome::Correct), "✓ A is in the word!");
        assert_eq!(outcome_message(a, GuessOutcome::Incorrect), "✗ A is not in the word");
        assert_eq!(outcome_message(a, GuessOutcome::AlreadyGuessed), "You already tried A");
        assert_eq!(outcome_message(a, GuessOutcome::GameOver), "The game is over");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn attempts_bar_tracks_remaining() {
        assert_eq!(attempts_bar(&game("DOG", 2, "X"), 4), "██░░");
    }
}
