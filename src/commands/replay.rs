//! Replay an action script through the state machine
//!
//! One action per line (`initialize house`, `input mouse`, `submit`, `win`, ...).
//! Blank lines and `#` comments are skipped. No win/loss checks run here: the
//! script is folded through the pure transition function exactly as written.

use crate::core::{Action, GameState};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Fold every action of `script` into a fresh state
///
/// # Examples
/// ```
/// use wordle_game::commands::replay_actions;
/// use wordle_game::core::PlayState;
///
/// let state = replay_actions("initialize house\ninput house\nsubmit\nwin\n");
/// assert_eq!(state.play_state(), PlayState::Won);
/// assert_eq!(state.active_row(), 1);
/// ```
#[must_use]
pub fn replay_actions(script: &str) -> GameState {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Action::parse)
        .fold(GameState::new(), |state, action| {
            if let Action::Unrecognized(line) = &action {
                warn!(line = %line, "ignoring unrecognized action");
            }
            state.apply(&action)
        })
}

/// Replay the script stored at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn replay_file(path: &Path) -> Result<GameState> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Failed to read action script {}", path.display()))?;
    Ok(replay_actions(&script))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LINES, PlayState};

    #[test]
    fn empty_script_is_initial_state() {
        assert_eq!(replay_actions(""), GameState::new());
        assert_eq!(replay_actions("# nothing\n\n"), GameState::new());
    }

    #[test]
    fn house_script() {
        let state = replay_actions(
            "initialize house
             input mouse
             submit
             input house
             submit
             win",
        );
        assert_eq!(state.guess(0), Some("mouse"));
        assert_eq!(state.guess(1), Some("house"));
        assert_eq!(state.active_row(), 2);
        assert_eq!(state.play_state(), PlayState::Won);
    }

    #[test]
    fn unknown_lines_are_skipped() {
        let with_noise = replay_actions("initialize house\njump\ninput ho\nundo\n");
        let clean = replay_actions("initialize house\ninput ho\n");
        assert_eq!(with_noise, clean);
    }

    #[test]
    fn over_submitting_saturates() {
        let script = "initialize house\n".to_string() + &"submit\n".repeat(LINES + 4);
        let state = replay_actions(&script);
        assert_eq!(state.active_row(), LINES);
        assert!(state.is_playing());
    }

    #[test]
    fn missing_file_is_error() {
        let err = replay_file(Path::new("/no/such/script.txt")).unwrap_err();
        assert!(err.to_string().contains("/no/such/script.txt"));
    }
}
