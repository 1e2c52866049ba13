//! TUI rendering with ratatui
//!
//! Tiles are colored by calling the feedback evaluator on every draw.

use super::app::App;
use crate::core::{GameState, LINES, PlayState, Variant, WORD_LENGTH, classify};
use crate::session::Statistics;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Prompt / restart control
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let state = app.controller.state();

    render_header(f, chunks[0]);
    render_board(f, state, chunks[1]);
    render_prompt(f, state, chunks[2]);
    render_status(f, app.controller.stats(), chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

/// Style for one tile
#[must_use]
pub(crate) fn tile_style(variant: Variant) -> Style {
    match variant {
        Variant::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Variant::Close => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Variant::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
        Variant::Empty => Style::default().fg(Color::White),
    }
}

fn board_row(state: &GameState, row: usize) -> Line<'static> {
    let guess = state.guess(row).unwrap_or_default();
    let mut letters = guess.chars();

    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for letter_index in 0..WORD_LENGTH {
        let letter = letters.next().map_or('·', |c| c.to_ascii_uppercase());
        let variant = classify(
            guess,
            state.solution(),
            row,
            letter_index,
            state.active_row(),
        );
        if letter_index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {letter} "), tile_style(variant)));
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let mut lines = Vec::with_capacity(LINES * 2);
    for row in 0..LINES {
        if row > 0 {
            lines.push(Line::from(""));
        }
        lines.push(board_row(state, row));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_prompt(f: &mut Frame, state: &GameState, area: Rect) {
    let (title, content, color) = match state.play_state() {
        PlayState::Playing => (
            " Type a word | Enter submits | Backspace deletes ",
            format!("Guess {} of {LINES}", (state.active_row() + 1).min(LINES)),
            Color::Yellow,
        ),
        PlayState::Won => (
            " Enter: play again | q: quit ",
            "You Win! Play Again?".to_string(),
            Color::Green,
        ),
        PlayState::Lost => (
            " Enter: play again | q: quit ",
            format!(
                "You Lose. The word was {}. Play Again?",
                state.solution().to_uppercase()
            ),
            Color::Red,
        ),
    };

    let prompt = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, stats: &Statistics, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let distribution = (1..=LINES)
        .map(|guesses| format!("{guesses}:{}", stats.guess_distribution[guesses]))
        .collect::<Vec<_>>()
        .join(" ");
    f.render_widget(
        Paragraph::new(distribution).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc / Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Controller, Key};
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::{Buffer, Cell},
    };

    fn draw(app: &App<'_, StdRng>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(Cell::symbol).collect()
    }

    fn has_background(buffer: &Buffer, color: Color) -> bool {
        buffer.content().iter().any(|cell| cell.bg == color)
    }

    fn app_with_guesses<'a>(words: &'a WordList, guesses: &[&str]) -> App<'a, StdRng> {
        let mut controller =
            Controller::new(words, StdRng::seed_from_u64(11)).with_fixed_solution("roast");
        controller.start();
        for guess in guesses {
            for key in Key::typed(guess) {
                controller.handle_key(key);
            }
            controller.handle_key(Key::Enter);
        }
        App::new(controller)
    }

    #[test]
    fn tile_styles_differ_per_variant() {
        assert_eq!(tile_style(Variant::Correct).bg, Some(Color::Green));
        assert_eq!(tile_style(Variant::Close).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Variant::Incorrect).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(Variant::Empty).bg, None);
    }

    #[test]
    fn fresh_board_has_no_colored_tiles() {
        let words = WordList::from_words(["roast", "robot"]);
        let buffer = draw(&app_with_guesses(&words, &[]));

        assert!(text(&buffer).contains("Guess 1 of 6"));
        assert!(!has_background(&buffer, Color::Green));
        assert!(!has_background(&buffer, Color::Yellow));
    }

    #[test]
    fn submitted_row_is_colored() {
        let words = WordList::from_words(["roast", "robot"]);
        let buffer = draw(&app_with_guesses(&words, &["robot"]));
        let content = text(&buffer);

        assert!(content.contains(" R "));
        assert!(content.contains("Guess 2 of 6"));
        assert!(has_background(&buffer, Color::Green));
        assert!(has_background(&buffer, Color::Yellow));
        assert!(has_background(&buffer, Color::DarkGray));
    }

    #[test]
    fn win_shows_restart_control() {
        let words = WordList::from_words(["roast", "robot"]);
        let buffer = draw(&app_with_guesses(&words, &["roast"]));
        let content = text(&buffer);

        assert!(content.contains("You Win! Play Again?"));
        assert!(content.contains("Games: 1 | Win Rate: 100%"));
    }

    #[test]
    fn loss_reveals_solution() {
        let words = WordList::from_words(["roast", "robot"]);
        let guesses = ["robot"; LINES];
        let buffer = draw(&app_with_guesses(&words, &guesses));

        assert!(text(&buffer).contains("You Lose. The word was ROAST. Play Again?"));
    }
}
