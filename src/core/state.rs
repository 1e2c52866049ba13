//! Game state and its pure transition function
//!
//! The state is a plain value. Every transition builds a new `GameState` from the
//! previous one and an `Action`; nothing here draws words, compares guesses with the
//! solution, or validates input. Those decisions belong to the caller driving the game.

use std::fmt;

/// Number of attempt rows on the board
pub const LINES: usize = 6;

/// Number of letters in a solution and in a complete guess
pub const WORD_LENGTH: usize = 5;

/// Whether the game currently accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl PlayState {
    /// `true` once the game has been won or lost
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A command for the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start over with an empty board and the given solution (empty if `None`)
    Initialize(Option<String>),
    /// Replace the active row with this text, verbatim
    HandleInput(String),
    /// Move to the next row
    Submit,
    Win,
    Lose,
    /// Anything the machine does not know; applying it changes nothing
    Unrecognized(String),
}

impl Action {
    /// Parse a textual command
    ///
    /// Total: every input yields an action. Accepted forms are `initialize [word]`,
    /// `input <text>`, `submit`, `win` and `lose` (keywords are case-insensitive).
    /// Everything else becomes [`Action::Unrecognized`].
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Action;
    ///
    /// assert_eq!(Action::parse("submit"), Action::Submit);
    /// assert_eq!(
    ///     Action::parse("initialize house"),
    ///     Action::Initialize(Some("house".to_string()))
    /// );
    /// assert!(matches!(Action::parse("jump"), Action::Unrecognized(_)));
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match (keyword.to_ascii_lowercase().as_str(), rest) {
            ("initialize" | "init", "") => Self::Initialize(None),
            ("initialize" | "init", word) => Self::Initialize(Some(word.to_string())),
            ("input", text) => Self::HandleInput(text.to_string()),
            ("submit", "") => Self::Submit,
            ("win", "") => Self::Win,
            ("lose", "") => Self::Lose,
            _ => Self::Unrecognized(line.to_string()),
        }
    }
}

/// Snapshot of a game: solution, board rows, active row and play state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    solution: String,
    guesses: [String; LINES],
    active_row: usize,
    play_state: PlayState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The state a session starts in: empty board, no solution, playing
    #[must_use]
    pub fn new() -> Self {
        Self {
            solution: String::new(),
            guesses: std::array::from_fn(|_| String::new()),
            active_row: 0,
            play_state: PlayState::Playing,
        }
    }

    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// All board rows, submitted or not
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &[String; LINES] {
        &self.guesses
    }

    /// Text of one row, or `None` past the bottom of the board
    #[inline]
    #[must_use]
    pub fn guess(&self, row: usize) -> Option<&str> {
        self.guesses.get(row).map(String::as_str)
    }

    /// Index of the row accepting input; equals `LINES` once the board is full
    #[inline]
    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    #[inline]
    #[must_use]
    pub const fn play_state(&self) -> PlayState {
        self.play_state
    }

    #[inline]
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.play_state, PlayState::Playing)
    }

    /// Text of the active row, if there still is one
    #[must_use]
    pub fn active_guess(&self) -> Option<&str> {
        self.guess(self.active_row)
    }

    /// The most recently submitted row
    #[must_use]
    pub fn last_submitted(&self) -> Option<&str> {
        self.active_row
            .checked_sub(1)
            .and_then(|row| self.guess(row))
    }

    /// Compute the state that follows `action`
    ///
    /// Pure and total. Preconditions listed on [`Action`] are the caller's to
    /// check; when they are violated the result is still well defined:
    /// - `HandleInput` with no active row (board full) changes nothing
    /// - `Submit` with a full board leaves the row index at `LINES`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Action, GameState};
    ///
    /// let state = GameState::new()
    ///     .apply(&Action::Initialize(Some("house".into())))
    ///     .apply(&Action::HandleInput("mouse".into()))
    ///     .apply(&Action::Submit);
    ///
    /// assert_eq!(state.guess(0), Some("mouse"));
    /// assert_eq!(state.active_row(), 1);
    /// ```
    #[must_use]
    pub fn apply(&self, action: &Action) -> Self {
        match action {
            Action::Initialize(solution) => Self {
                solution: solution.clone().unwrap_or_default(),
                ..Self::new()
            },
            Action::HandleInput(text) => {
                let mut next = self.clone();
                if let Some(row) = next.guesses.get_mut(self.active_row) {
                    row.clone_from(text);
                }
                next
            }
            Action::Submit => Self {
                active_row: (self.active_row + 1).min(LINES),
                ..self.clone()
            },
            Action::Win => Self {
                play_state: PlayState::Won,
                ..self.clone()
            },
            Action::Lose => Self {
                play_state: PlayState::Lost,
                ..self.clone()
            },
            Action::Unrecognized(_) => self.clone(),
        }
    }
}

/// Free-function form of [`GameState::apply`]
#[must_use]
pub fn apply(state: &GameState, action: &Action) -> GameState {
    state.apply(action)
}
