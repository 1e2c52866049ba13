//! Wordle
//!
//! A terminal Wordle: guess the hidden five-letter word in six tries.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Action, GameState, Variant, classify};
//!
//! // Drive the state machine
//! let state = GameState::new()
//!     .apply(&Action::Initialize(Some("roast".into())))
//!     .apply(&Action::HandleInput("robot".into()))
//!     .apply(&Action::Submit);
//!
//! // Color the first tile of the submitted row
//! let variant = classify(state.guess(0).unwrap(), state.solution(), 0, 0, state.active_row());
//! assert_eq!(variant, Variant::Correct);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Session controller and keyboard rules
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
