//! Interactive TUI interface
//!
//! Renders the board with ratatui and feeds crossterm key events to the session controller.

mod app;
mod rendering;
mod terminal;

pub use app::{App, key_from_code, run_tui};
pub use rendering::ui;
pub use terminal::TerminalSession;
