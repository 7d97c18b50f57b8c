//! TUI rendering with ratatui
//!
//! Every frame is drawn from the current game snapshot; nothing derived is cached.

use super::app::{App, MessageStyle};
use crate::core::{ALPHABET, GameState, GameStatus};
use crate::output::formatters::{BODY_PARTS, gallows_lines, letters_list, parts_shown};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Keyboard rows shown under the board
const KEYBOARD_ROWS: [std::ops::Range<usize>; 3] = [0..9, 9..18, 18..26];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and letters
        ])
        .split(chunks[1]);

    render_gallows_panel(f, &app.game, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, &app.game, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows_panel(f: &mut Frame, game: &GameState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Drawing
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    let parts = parts_shown(game);
    let figure_color = match game.status() {
        GameStatus::Lost => Color::Red,
        GameStatus::Won => Color::Green,
        GameStatus::Playing => Color::White,
    };

    let mut lines: Vec<Line> = gallows_lines(parts)
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(figure_color)))
        .collect();
    if parts > 0 {
        lines.push(Line::styled(
            BODY_PARTS[..parts].join(", "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let drawing = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(drawing, chunks[0]);

    let remaining = game.remaining_attempts();
    let max = game.max_attempts();
    let gauge_color = if remaining * 3 <= max {
        Color::Red
    } else {
        Color::Yellow
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(f64::from(remaining) / f64::from(max))
        .label(format!("{remaining}/{max} remaining"));
    f.render_widget(gauge, chunks[1]);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Masked word
            Constraint::Length(4), // Used letters
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, &app.game, chunks[0]);
    render_used_letters(f, &app.game, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, game: &GameState, area: Rect) {
    // Reveal the whole word once the game is lost, missing letters in red
    let spans: Vec<Span> = if game.status() == GameStatus::Lost {
        game.secret_word()
            .letters()
            .flat_map(|letter| {
                let style = if game.is_guessed(letter) {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Red)
                };
                [
                    Span::styled(letter.to_string(), style.add_modifier(Modifier::BOLD)),
                    Span::raw(" "),
                ]
            })
            .collect()
    } else {
        vec![Span::styled(
            game.masked_word_with(" "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word ({} letters) ", game.secret_word().len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(paragraph, area);
}

fn render_used_letters(f: &mut Frame, game: &GameState, area: Rect) {
    let buckets = game.letter_buckets();

    let content = vec![
        Line::from(vec![
            Span::raw("Correct:   "),
            Span::styled(
                letters_list(&buckets.correct),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Incorrect: "),
            Span::styled(
                letters_list(&buckets.incorrect),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Used Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let last = app.last_guess.map(|(letter, _)| letter);

    let rows: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|range| {
            let keys: Vec<Span> = ALPHABET[range.clone()]
                .iter()
                .map(|&letter| {
                    let style = if !game.is_guessed(letter) {
                        if game.is_over() {
                            Style::default().fg(Color::DarkGray)
                        } else {
                            Style::default().fg(Color::Black).bg(Color::LightBlue)
                        }
                    } else if game.secret_word().contains(letter) {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    };
                    let style = if Some(letter) == last {
                        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        style
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .flat_map(|key| [key, Span::raw(" ")])
                .collect();
            Line::from(keys)
        })
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, game: &GameState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let (status_text, color) = match game.status() {
        GameStatus::Playing => (
            format!("Status: Playing | Guesses: {}", game.guessed_letters().len()),
            Color::White,
        ),
        GameStatus::Won => ("Status: You won! 🎉".to_string(), Color::Green),
        GameStatus::Lost => (
            format!(
                "Status: You lost! The word was {}",
                game.revealed_word().unwrap_or_default()
            ),
            Color::Red,
        ),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(status, chunks[0]);

    let help_text = if game.is_over() {
        "Enter/Ctrl-N: New Game | Esc: Quit"
    } else {
        "A-Z: Guess | Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
