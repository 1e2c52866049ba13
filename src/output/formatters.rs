//! Formatting utilities for terminal output

use crate::core::{GameState, LINES, PlayState, Variant, classify_row};

/// Emoji square for one tile
#[must_use]
pub const fn variant_to_emoji(variant: Variant) -> char {
    match variant {
        Variant::Correct => '🟩',
        Variant::Close => '🟨',
        Variant::Incorrect => '⬛',
        Variant::Empty => '⬜',
    }
}

/// Emoji squares for one board row
#[must_use]
pub fn row_to_emoji(state: &GameState, row: usize) -> String {
    classify_row(state, row)
        .into_iter()
        .map(variant_to_emoji)
        .collect()
}

/// Spoiler-free summary of the submitted rows
///
/// # Examples
/// ```
/// use wordle_game::core::{Action, GameState};
/// use wordle_game::output::formatters::share_grid;
///
/// let state = GameState::new()
///     .apply(&Action::Initialize(Some("roast".into())))
///     .apply(&Action::HandleInput("robot".into()))
///     .apply(&Action::Submit);
///
/// assert_eq!(share_grid(&state), "Wordle 1/6\n🟩🟩⬛🟨🟩");
/// ```
#[must_use]
pub fn share_grid(state: &GameState) -> String {
    let score = match state.play_state() {
        PlayState::Lost => "X".to_string(),
        PlayState::Won | PlayState::Playing => state.active_row().to_string(),
    };

    let mut grid = format!("Wordle {score}/{LINES}");
    for row in 0..state.active_row() {
        grid.push('\n');
        grid.push_str(&row_to_emoji(state, row));
    }
    grid
}
