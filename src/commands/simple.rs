//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is typed into the active row
//! through the same keyboard rules the TUI uses, then submitted with Enter.

use crate::core::{LINES, PlayState};
use crate::output::{print_board, print_outcome, print_statistics};
use crate::session::{Controller, Key};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng>(controller: &mut Controller<'_, R>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(controller, &mut stdin.lock(), &mut stdout.lock())
}

/// Play games reading guesses from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_lines<R: Rng, I: BufRead, W: Write>(
    controller: &mut Controller<'_, R>,
    input: &mut I,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║              W O R D L E                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in {LINES} tries.")?;
    writeln!(
        out,
        "{} right spot  {} wrong spot  {} not in word",
        " A ".black().on_green(),
        " B ".black().on_yellow(),
        " C ".white().on_bright_black()
    )?;
    writeln!(out, "Type 'quit' to exit.")?;

    controller.start();
    if controller.state().solution().is_empty() {
        writeln!(out, "No words to play with!")?;
        return Ok(());
    }

    loop {
        print_board(out, controller.state())?;

        if controller.state().play_state() != PlayState::Playing {
            print_outcome(out, controller.state())?;
            print_statistics(out, controller.stats())?;

            match read_line(input, out, "\nPlay again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    controller.restart();
                    writeln!(out, "\n🔄 New game started!")?;
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!("Guess {}/{LINES}", controller.state().active_row() + 1);
        let Some(line) = read_line(input, out, &prompt)? else {
            break;
        };

        if matches!(line.as_str(), "quit" | "q" | "exit") {
            break;
        }

        controller.clear_input();
        for key in Key::typed(&line) {
            controller.handle_key(key);
        }
        controller.handle_key(Key::Enter);
    }

    info!(games = controller.stats().total_games, "line mode finished");
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run<'a>(
        words: &'a WordList,
        solution: &str,
        script: &str,
    ) -> (String, Controller<'a, StdRng>) {
        let mut controller =
            Controller::new(words, StdRng::seed_from_u64(2)).with_fixed_solution(solution);
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        play_lines(&mut controller, &mut input, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), controller)
    }

    fn words() -> WordList {
        WordList::from_words(["house", "mouse", "horse", "crane"])
    }

    #[test]
    fn winning_game() {
        let words = words();
        let (out, controller) = run(&words, "house", "mouse\nhouse\nno\n");

        assert!(out.contains("You Win!"));
        assert!(out.contains("Wordle 2/6"));
        assert!(out.contains("Thanks for playing"));
        assert_eq!(controller.state().play_state(), PlayState::Won);
        assert_eq!(controller.stats().games_won, 1);
    }

    #[test]
    fn invalid_lines_do_not_use_a_row() {
        let words = words();
        let (_, controller) = run(&words, "house", "abcde\nhou\nhouses\nquit\n");

        // "houses" is cut to "house" by the five-letter cap and wins
        assert_eq!(controller.state().play_state(), PlayState::Won);
        assert_eq!(controller.state().guess(0), Some("house"));
        assert_eq!(controller.state().active_row(), 1);
    }

    #[test]
    fn losing_game_then_replay() {
        let words = words();
        let script = "crane\n".repeat(LINES) + "yes\nhouse\nno\n";
        let (out, controller) = run(&words, "house", &script);

        assert!(out.contains("The word was"));
        assert!(out.contains("New game started"));
        assert_eq!(controller.stats().total_games, 2);
        assert_eq!(controller.stats().games_won, 1);
    }

    #[test]
    fn quit_mid_game() {
        let words = words();
        let (out, controller) = run(&words, "house", "mouse\nquit\nhouse\n");

        assert!(out.contains("Thanks for playing"));
        assert_eq!(controller.state().active_row(), 1);
        assert!(controller.state().is_playing());
    }

    #[test]
    fn end_of_input_stops() {
        let words = words();
        let (_, controller) = run(&words, "house", "mouse\n");
        assert_eq!(controller.state().active_row(), 1);
    }

    #[test]
    fn empty_word_list() {
        let words = WordList::default();
        let mut controller = Controller::new(&words, StdRng::seed_from_u64(2));
        let mut input = Cursor::new(String::new());
        let mut out = Vec::new();
        play_lines(&mut controller, &mut input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No words to play with!"));
    }
}
