//! Session controller
//!
//! Drives the pure state machine: draws solutions, gates keyboard input and issues
//! `Win`/`Lose` after observing each new state.

use super::{Key, Statistics};
use crate::core::{Action, GameState, LINES, PlayState, WORD_LENGTH};
use crate::wordlists::WordList;
use rand::Rng;
use tracing::{debug, info, warn};

/// Owner of the game state for one session
pub struct Controller<'a, R: Rng> {
    state: GameState,
    words: &'a WordList,
    rng: R,
    fixed_solution: Option<String>,
    stats: Statistics,
}

impl<'a, R: Rng> Controller<'a, R> {
    /// Create a controller with an empty board and no solution
    ///
    /// Call [`start`](Self::start) to draw the first solution.
    pub fn new(words: &'a WordList, rng: R) -> Self {
        Self {
            state: GameState::new(),
            words,
            rng,
            fixed_solution: None,
            stats: Statistics::default(),
        }
    }

    /// Use `word` as the solution of every game instead of drawing one
    #[must_use]
    pub fn with_fixed_solution(mut self, word: impl Into<String>) -> Self {
        let word = word.into().trim().to_lowercase();
        self.fixed_solution = (!word.is_empty()).then_some(word);
        self
    }

    /// Begin the session: the first solution is drawn here
    pub fn start(&mut self) {
        self.settle();
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Apply `action`, then let the session react to the new state
    pub fn dispatch(&mut self, action: &Action) {
        self.transition(action);
        self.settle();
    }

    /// Feed one keypress through the input rules
    ///
    /// Returns `true` if the state changed. Input is ignored unless the game is
    /// being played; Enter only submits a row that is a known five-letter word.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        let Some(input) = self.state.active_guess() else {
            return false;
        };

        let action = match key {
            Key::Enter => {
                if !self.words.is_valid_guess(input) {
                    debug!(guess = input, "submit rejected");
                    return false;
                }
                Action::Submit
            }
            Key::Backspace => {
                let mut text = input.to_string();
                if text.pop().is_none() {
                    return false;
                }
                Action::HandleInput(text)
            }
            Key::Char(c) if c.is_ascii_alphabetic() && input.chars().count() < WORD_LENGTH => {
                Action::HandleInput(format!("{input}{}", c.to_ascii_lowercase()))
            }
            Key::Char(_) | Key::Other => return false,
        };

        self.dispatch(&action);
        true
    }

    /// Empty the active row
    pub fn clear_input(&mut self) {
        if self.state.is_playing() && self.state.active_guess().is_some_and(|g| !g.is_empty()) {
            self.dispatch(&Action::HandleInput(String::new()));
        }
    }

    /// Activate the restart control: start over with a freshly drawn solution
    pub fn restart(&mut self) {
        info!("restarting game");
        self.dispatch(&Action::Initialize(None));
    }

    fn transition(&mut self, action: &Action) {
        let before = self.state.play_state();
        self.state = self.state.apply(action);

        match (before, self.state.play_state()) {
            (PlayState::Playing, PlayState::Won) => {
                let guesses = self.state.active_row();
                self.stats.record_win(guesses);
                info!(guesses, "game won");
            }
            (PlayState::Playing, PlayState::Lost) => {
                self.stats.record_loss();
                info!(solution = self.state.solution(), "game lost");
            }
            _ => {}
        }
    }

    /// Run follow-up actions until the state is stable
    fn settle(&mut self) {
        while let Some(action) = self.follow_up() {
            self.transition(&action);
        }
    }

    /// The action the current state calls for, if any
    fn follow_up(&mut self) -> Option<Action> {
        if !self.state.is_playing() {
            return None;
        }

        if self.state.solution().is_empty() {
            let solution = self.draw_solution()?;
            debug!(solution = %solution, "solution drawn");
            info!("new game started");
            return Some(Action::Initialize(Some(solution)));
        }

        let last = self
            .state
            .last_submitted()
            .filter(|guess| !guess.is_empty())?;

        if last.to_lowercase() == self.state.solution().to_lowercase() {
            Some(Action::Win)
        } else if self.state.active_row() >= LINES {
            Some(Action::Lose)
        } else {
            None
        }
    }

    fn draw_solution(&mut self) -> Option<String> {
        if let Some(word) = &self.fixed_solution {
            return Some(word.clone());
        }

        let word = self.words.choose(&mut self.rng).map(str::to_string);
        if word.is_none() {
            warn!("word list is empty, no solution to draw");
        }
        word
    }
}
