//! Colored board printing for line mode

use super::formatters::share_grid;
use crate::core::{GameState, LINES, PlayState, Variant, WORD_LENGTH, classify_row};
use crate::session::Statistics;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// One tile as a colored ` X ` cell
#[must_use]
pub fn colored_tile(letter: char, variant: Variant) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match variant {
        Variant::Correct => cell.black().on_green().bold(),
        Variant::Close => cell.black().on_yellow().bold(),
        Variant::Incorrect => cell.white().on_bright_black(),
        Variant::Empty => cell.normal(),
    }
}

/// Render the board, one string per row
#[must_use]
pub fn board_lines(state: &GameState) -> Vec<String> {
    (0..LINES)
        .map(|row| {
            let mut letters = state.guess(row).unwrap_or_default().chars();
            classify_row(state, row)
                .into_iter()
                .map(|variant| colored_tile(letters.next().unwrap_or('·'), variant).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Print the board
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for line in board_lines(state) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out, "  {}", "─".repeat(WORD_LENGTH * 4 - 1).bright_black())?;
    Ok(())
}

/// Print the end-of-game banner and share grid
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    match state.play_state() {
        PlayState::Won => writeln!(out, "\n{}", "🎉 You Win! 🎉".green().bold())?,
        PlayState::Lost => writeln!(
            out,
            "\n{} The word was {}.",
            "You Lose.".red().bold(),
            state.solution().to_uppercase().bright_yellow().bold()
        )?,
        PlayState::Playing => return Ok(()),
    }

    writeln!(out, "\n{}\n", share_grid(state))?;
    Ok(())
}

/// Print the session statistics
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "{} {} played | {:.0}% won",
        "Statistics:".bright_cyan().bold(),
        stats.total_games,
        stats.win_rate()
    )?;

    let most = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    for guesses in 1..=LINES {
        let count = stats.guess_distribution[guesses];
        let bar_width = count * 20 / most;
        writeln!(
            out,
            "   {guesses}: {}{} {count}",
            "█".repeat(bar_width).green(),
            "░".repeat(20 - bar_width).bright_black()
        )?;
    }
    Ok(())
}
