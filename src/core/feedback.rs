//! Per-letter feedback for the board tiles
//!
//! Each letter is classified on its own: present letters are `Close` unless they sit
//! in the same position in the solution. Repeated letters are not budgeted against
//! the number of times they occur in the solution, so `speed` against `abide` marks
//! both `e`s as `Close` even though `abide` has only one.

use super::state::{GameState, WORD_LENGTH};

/// How a single tile is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Row not submitted yet, or no letter in this cell
    #[default]
    Empty,
    /// Letter is in the solution at this position
    Correct,
    /// Letter is in the solution elsewhere
    Close,
    /// Letter is not in the solution
    Incorrect,
}

/// Classify the letter at `letter_index` of `guess`
///
/// Rows from `active_row` onward have not been submitted and are always
/// [`Variant::Empty`], as are indices past the end of the guess.
///
/// # Examples
/// ```
/// use wordle_game::core::{Variant, classify};
///
/// assert_eq!(classify("ROBOT", "ROAST", 0, 0, 1), Variant::Correct);
/// assert_eq!(classify("ROBOT", "ROAST", 0, 2, 1), Variant::Incorrect);
/// assert_eq!(classify("ROBOT", "TORCH", 0, 0, 1), Variant::Close);
/// assert_eq!(classify("ROBOT", "TORCH", 1, 0, 1), Variant::Empty);
/// ```
#[must_use]
pub fn classify(
    guess: &str,
    solution: &str,
    row_index: usize,
    letter_index: usize,
    active_row: usize,
) -> Variant {
    if row_index >= active_row {
        return Variant::Empty;
    }

    let Some(letter) = lowercase_at(guess, letter_index) else {
        return Variant::Empty;
    };

    if !solution.to_lowercase().contains(letter.as_str()) {
        return Variant::Incorrect;
    }

    if lowercase_at(solution, letter_index) == Some(letter) {
        Variant::Correct
    } else {
        Variant::Close
    }
}

/// Lowercase form of the char at `index`, picked before lowering so that letters
/// lowering to several chars don't shift later positions
fn lowercase_at(word: &str, index: usize) -> Option<String> {
    word.chars().nth(index).map(|c| c.to_lowercase().collect())
}

/// Classify every tile of one board row
///
/// Rows past the bottom of the board come back all [`Variant::Empty`].
#[must_use]
pub fn classify_row(state: &GameState, row_index: usize) -> [Variant; WORD_LENGTH] {
    let guess = state.guess(row_index).unwrap_or_default();
    std::array::from_fn(|letter_index| {
        classify(
            guess,
            state.solution(),
            row_index,
            letter_index,
            state.active_row(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, LINES};

    #[test]
    fn unsubmitted_rows_are_empty() {
        for active_row in 0..=LINES {
            for row in active_row..LINES + 2 {
                for letter in 0..7 {
                    assert_eq!(
                        classify("house", "house", row, letter, active_row),
                        Variant::Empty
                    );
                }
            }
        }
    }

    #[test]
    fn correct_position() {
        assert_eq!(classify("ROBOT", "ROAST", 0, 0, 1), Variant::Correct);
        assert_eq!(classify("ROBOT", "ROAST", 0, 1, 1), Variant::Correct);
    }

    #[test]
    fn absent_letter() {
        assert_eq!(classify("ROBOT", "ROAST", 0, 2, 1), Variant::Incorrect);
    }

    #[test]
    fn present_elsewhere() {
        assert_eq!(classify("ROBOT", "TORCH", 0, 0, 1), Variant::Close);
        assert_eq!(classify("ROBOT", "TORCH", 0, 4, 1), Variant::Close);
    }

    #[test]
    fn case_insensitive_both_ways() {
        assert_eq!(classify("robot", "ROAST", 0, 0, 1), Variant::Correct);
        assert_eq!(classify("RoBoT", "roast", 0, 4, 1), Variant::Correct);
        assert_eq!(classify("robot", "TORCH", 0, 0, 1), Variant::Close);
    }

    #[test]
    fn missing_letter_is_empty() {
        assert_eq!(classify("ro", "roast", 0, 3, 1), Variant::Empty);
        assert_eq!(classify("", "roast", 0, 0, 1), Variant::Empty);
        assert_eq!(classify("roast", "roast", 0, 99, 1), Variant::Empty);
    }

    #[test]
    fn multi_char_lowercase_keeps_positions() {
        // 'İ' lowers to "i\u{307}", which must not push 'r' off index 1
        assert_eq!(classify("İrbcd", "xrxxx", 0, 1, 1), Variant::Correct);
        assert_eq!(classify("arbcd", "İrxxx", 0, 1, 1), Variant::Correct);
        assert_eq!(classify("İrbcd", "İrxxx", 0, 0, 1), Variant::Correct);
        assert_eq!(classify("xİxxx", "İrxxx", 0, 1, 1), Variant::Close);
        assert_eq!(classify("İrbcd", "xrxxx", 0, 0, 1), Variant::Incorrect);
    }

    #[test]
    fn repeated_letters_are_not_budgeted() {
        let row: Vec<_> = (0..5)
            .map(|i| classify("geese", "eerie", 0, i, 1))
            .collect();
        assert_eq!(
            row,
            vec![
                Variant::Incorrect,
                Variant::Correct,
                Variant::Close,
                Variant::Incorrect,
                Variant::Correct,
            ]
        );

        // abide has a single e, both e's of speed still show as close
        assert_eq!(classify("speed", "abide", 0, 2, 1), Variant::Close);
        assert_eq!(classify("speed", "abide", 0, 3, 1), Variant::Close);
    }

    #[test]
    fn classify_row_follows_state() {
        let state = GameState::new()
            .apply(&Action::Initialize(Some("roast".to_string())))
            .apply(&Action::HandleInput("robot".to_string()))
            .apply(&Action::Submit)
            .apply(&Action::HandleInput("toa".to_string()));

        assert_eq!(
            classify_row(&state, 0),
            [
                Variant::Correct,
                Variant::Correct,
                Variant::Incorrect,
                Variant::Close,
                Variant::Correct,
            ]
        );
        // Active row is not colored yet
        assert_eq!(classify_row(&state, 1), [Variant::Empty; WORD_LENGTH]);
        assert_eq!(classify_row(&state, LINES + 1), [Variant::Empty; WORD_LENGTH]);
    }
}
