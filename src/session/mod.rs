//! Game session orchestration
//!
//! The controller owns the single authoritative [`GameState`](crate::core::GameState),
//! turns keypresses into actions and runs the win/loss checks after every transition.

mod controller;
mod input;
mod stats;

pub use controller::Controller;
pub use input::Key;
pub use stats::Statistics;
