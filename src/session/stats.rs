//! Per-process game statistics

use crate::core::LINES;

/// Running tally of finished games
///
/// Lives as long as the process; nothing is written to disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used (index 0 unused)
    pub guess_distribution: [usize; LINES + 1],
}

impl Statistics {
    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// Percentage of games won, 0 before any game finished
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
