//! Core game types for Wordle
//!
//! The state machine and the feedback evaluator. Both are pure: no I/O, no
//! randomness, no word lists. Everything here can be tested in isolation.

mod feedback;
mod state;

pub use feedback::{Variant, classify, classify_row};
pub use state::{Action, GameState, LINES, PlayState, WORD_LENGTH, apply};
