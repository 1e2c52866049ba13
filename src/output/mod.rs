//! Terminal output formatting
//!
//! Display utilities for line mode and share summaries.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_statistics};
pub use formatters::share_grid;
