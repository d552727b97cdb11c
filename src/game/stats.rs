//! Session statistics
//!
//! Kept in memory for the lifetime of a frontend; nothing is persisted.

use super::{MAX_ATTEMPTS, Outcome};

/// Tally of finished games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts games won in `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Start an empty tally sized for `max_attempts` rows
    ///
    /// The distribution is capped at [`MAX_ATTEMPTS`] rows and grows on demand.
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts.min(MAX_ATTEMPTS).saturating_add(1)],
        }
    }

    /// Record a finished game; in-progress outcomes are ignored
    pub fn record(&mut self, outcome: Outcome, attempts: usize) {
        match outcome {
            Outcome::InProgress => return,
            Outcome::Won => {
                self.games_won += 1;
                if attempts >= self.guess_distribution.len() {
                    self.guess_distribution.resize(attempts.saturating_add(1), 0);
                }
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            Outcome::Lost => {}
        }
        self.total_games += 1;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
