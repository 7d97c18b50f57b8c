//! TUI application state and logic

use crate::core::{GameError, GameState, GameStatus, GuessOutcome, Letter, Vocabulary};
use crate::output::formatters::outcome_message;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
///
/// Owns the single current game snapshot and replaces it on every transition.
pub struct App<'a> {
    pub vocabulary: &'a Vocabulary,
    pub max_attempts: u32,
    pub game: GameState,
    pub last_guess: Option<(Letter, GuessOutcome)>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::ZeroAttempts` if `max_attempts` is 0.
    pub fn new(
        vocabulary: &'a Vocabulary,
        max_attempts: u32,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let game = GameState::new_game(vocabulary, max_attempts, &mut rng)?;
        tracing::info!(letters = game.secret_word().len(), "new game");

        Ok(Self {
            vocabulary,
            max_attempts,
            game,
            last_guess: None,
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter to guess it".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            rng,
        })
    }

    /// Replace the current game with a fresh one
    ///
    /// # Errors
    ///
    /// Returns `GameError::ZeroAttempts` if `max_attempts` is 0.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.game = GameState::new_game(self.vocabulary, self.max_attempts, &mut self.rng)?;
        self.last_guess = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        tracing::info!(letters = self.game.secret_word().len(), "new game");
        Ok(())
    }

    /// Guess a letter and report the outcome
    pub fn guess(&mut self, letter: Letter) {
        let outcome = self.game.evaluate_guess(letter);
        tracing::debug!(%letter, ?outcome, "guess");

        self.game = self.game.guess_letter(letter);
        self.last_guess = Some((letter, outcome));

        let style = match outcome {
            GuessOutcome::Correct => MessageStyle::Success,
            GuessOutcome::Incorrect | GuessOutcome::AlreadyGuessed | GuessOutcome::GameOver => {
                MessageStyle::Error
            }
        };
        self.add_message(&outcome_message(letter, outcome), style);

        if outcome.is_accepted() {
            match self.game.status() {
                GameStatus::Won => {
                    tracing::info!(word = self.game.secret_word().text(), "game won");
                    self.add_message("🎉 Congratulations! You won! 🎉", MessageStyle::Success);
                    self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
                }
                GameStatus::Lost => {
                    tracing::info!(word = self.game.secret_word().text(), "game lost");
                    let word = self.game.revealed_word().unwrap_or_default().to_string();
                    self.add_message(&format!("You lost! The word was: {word}"), MessageStyle::Error);
                    self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
                }
                GameStatus::Playing => {}
            }
        }
    }

    /// Apply a key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be created.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game()?;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter if self.game.is_over() => {
                self.new_game()?;
            }
            // Shift passes through for uppercase; other chords are not guesses
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                match Letter::new(c) {
                    Ok(letter) => self.guess(letter),
                    Err(err) => {
                        tracing::warn!(%err, "rejected key");
                        self.add_message(&err.to_string(), MessageStyle::Error);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app(vocabulary: &Vocabulary, max_attempts: u32) -> App<'_> {
        App::new(vocabulary, max_attempts, StdRng::seed_from_u64(3)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
            .unwrap();
    }

    #[test]
    fn app_rejects_zero_attempts() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        assert!(App::new(&vocabulary, 0, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn letter_keys_guess() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 6);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('z'));

        assert_eq!(app.game.masked_word(), "D__");
        assert_eq!(app.game.remaining_attempts(), 5);
        assert_eq!(
            app.last_guess,
            Some((Letter::new('Z').unwrap(), GuessOutcome::Incorrect))
        );
    }

    #[test]
    fn non_letter_key_is_reported() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 6);

        press(&mut app, KeyCode::Char('5'));

        assert!(app.game.guessed_letters().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn winning_then_enter_starts_new_game() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 6);

        for c in ['d', 'o', 'g'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game.status(), GameStatus::Won);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.game.remaining_attempts(), 6);
        assert_eq!(app.last_guess.map(|(_, o)| o), Some(GuessOutcome::GameOver));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.status(), GameStatus::Playing);
        assert!(app.game.guessed_letters().is_empty());
    }

    #[test]
    fn loss_message_reveals_word() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 1);

        press(&mut app, KeyCode::Char('x'));

        assert_eq!(app.game.status(), GameStatus::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You lost! The word was: DOG")
        );
    }

    #[test]
    fn enter_while_playing_does_nothing() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 6);
        press(&mut app, KeyCode::Char('d'));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.masked_word(), "D__");
    }

    #[test]
    fn ctrl_n_restarts_any_time() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 6);
        press(&mut app, KeyCode::Char('d'));

        ctrl(&mut app, 'n');
        assert!(app.game.guessed_letters().is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();

        let mut a = app(&vocabulary, 6);
        press(&mut a, KeyCode::Esc);
        assert!(a.should_quit);

        let mut b = app(&vocabulary, 6);
        ctrl(&mut b, 'c');
        assert!(b.should_quit);
        assert!(b.game.guessed_letters().is_empty());
    }

    #[test]
    fn control_and_alt_chords_are_not_guesses() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 6);

        ctrl(&mut app, 'z');
        ctrl(&mut app, 'd');
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
            .unwrap();

        assert!(app.game.guessed_letters().is_empty());
        assert_eq!(app.game.remaining_attempts(), 6);
        assert!(!app.should_quit);
    }

    #[test]
    fn shifted_letter_is_a_guess() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 6);

        app.handle_key(KeyEvent::new(KeyCode::Char('O'), KeyModifiers::SHIFT))
            .unwrap();

        assert_eq!(app.game.masked_word(), "_O_");
    }

    #[test]
    fn messages_are_capped() {
        let vocabulary = Vocabulary::from_strs(&["DOG"]).unwrap();
        let mut app = app(&vocabulary, 26);
        for c in ['a', 'b', 'c', 'e', 'f', 'h', 'i'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.messages.len(), 5);
    }
}
