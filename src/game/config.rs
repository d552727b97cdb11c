//! Game configuration

use crate::wordlists::SetupError;

/// Number of rows in the classic game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest row count a game accepts
pub const MAX_ATTEMPTS: usize = 20;

/// Settings for a game instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Rows available before the game is lost
    pub max_attempts: usize,
    /// Seed for secret word draws; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    /// Returns `SetupError::InvalidAttempts` if `max_attempts` is zero or
    /// above [`MAX_ATTEMPTS`].
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(1..=MAX_ATTEMPTS).contains(&self.max_attempts) {
            return Err(SetupError::InvalidAttempts(self.max_attempts));
        }
        Ok(())
    }
}
