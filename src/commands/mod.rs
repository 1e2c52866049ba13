//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{replay_actions, replay_file};
pub use simple::{play_lines, run_simple};
