//! Display functions for games and command results

use super::formatters::{
    BODY_PARTS, attempts_bar, gallows_lines, keyboard_line, letters_list, parts_shown,
};
use crate::commands::SimulationResult;
use crate::core::{GameState, GameStatus};
use colored::Colorize;

/// Print the full board for the current snapshot
pub fn print_board(game: &GameState) {
    println!("\n{}", "─".repeat(60).cyan());

    let parts = parts_shown(game);
    for line in gallows_lines(parts) {
        println!("{}", line.bright_white());
    }
    if parts > 0 {
        println!("  {}", BODY_PARTS[..parts].join(", ").bright_black());
    }

    println!(
        "\nAttempts left: [{}] {}/{}",
        attempts_bar(game, 12).yellow(),
        game.remaining_attempts().to_string().bright_yellow().bold(),
        game.max_attempts()
    );

    println!(
        "\n    {}\n",
        game.masked_word_with(" ").bright_white().bold()
    );

    let buckets = game.letter_buckets();
    println!("Correct:   {}", letters_list(&buckets.correct).green().bold());
    println!("Incorrect: {}", letters_list(&buckets.incorrect).red().bold());
    println!("Letters:   {}", keyboard_line(game).bright_black());
}

/// Print the end-of-game message
pub fn print_outcome(game: &GameState) {
    match game.status() {
        GameStatus::Won => println!(
            "\n{}",
            "🎉 Congratulations! You won! 🎉".green().bold()
        ),
        GameStatus::Lost => println!(
            "\n{} {}",
            "😔 You lost! The word was:".red().bold(),
            game.revealed_word().unwrap_or_default().bright_yellow().bold()
        ),
        GameStatus::Playing => {}
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Player:           {}", result.player);
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Won / Lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Avg wrong:        {:.2} of {}",
        result.average_wrong_guesses, result.max_attempts
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    for (wrong, &count) in &result.distribution {
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {wrong:2}: {bar} {count:6} ({pct:5.1}%)");
    }
}
