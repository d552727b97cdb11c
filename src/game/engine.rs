//! Game state machine
//!
//! ```text
//! in-progress --(submit_row: match)--> won
//! in-progress --(submit_row: last row, no match)--> lost
//! in-progress --(submit_row: no match)--> in-progress (next row)
//! in-progress --(submit_row: unknown word)--> in-progress (row cleared)
//! any --(new_game)--> in-progress (fresh state)
//! ```

use super::{Cursor, GameConfig, GameEvent, Grid, Key};
use crate::core::{Feedback, KeyboardState, WORD_LENGTH, Word};
use crate::wordlists::{SetupError, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single game instance
///
/// All mutation goes through [`Game::handle_key`] (or the three operations it
/// dispatches to) and [`Game::new_game`]. Keystrokes that do not apply are
/// ignored and produce no events.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{Game, GameConfig, GameEvent, Key, Outcome};
/// use wordle_game::wordlists::{WordSource, loader::words_from_slice};
///
/// let source = WordSource::new(words_from_slice(&["apple", "paper"])).unwrap();
/// let secret = Word::new("apple").unwrap();
/// let mut game = Game::with_secret(&source, GameConfig::default(), secret).unwrap();
///
/// for c in "apple".chars() {
///     game.handle_key(Key::Letter(c));
/// }
/// let events = game.handle_key(Key::Enter);
///
/// assert_eq!(game.outcome(), Outcome::Won);
/// assert!(matches!(events.last(), Some(GameEvent::Won { attempts: 1 })));
/// ```
#[derive(Debug, Clone)]
pub struct Game<'a> {
    source: &'a WordSource,
    config: GameConfig,
    rng: StdRng,
    secret: Word,
    grid: Grid,
    cursor: Cursor,
    outcome: Outcome,
    keyboard: KeyboardState,
}

impl<'a> Game<'a> {
    /// Start a game with a secret word drawn from `source`
    ///
    /// # Errors
    /// Returns `SetupError` if the configuration is invalid.
    pub fn new(source: &'a WordSource, config: GameConfig) -> Result<Self, SetupError> {
        config.validate()?;

        let mut rng = seeded_rng(config.seed);
        let secret = source.random_word(&mut rng).clone();
        log::debug!("new game started ({} rows)", config.max_attempts);

        Ok(Self::from_parts(source, config, rng, secret))
    }

    /// Start a game with a known secret word
    ///
    /// The secret should belong to `source`, otherwise it can never be guessed.
    /// Later calls to [`Game::new_game`] draw from `source` as usual.
    ///
    /// # Errors
    /// Returns `SetupError` if the configuration is invalid.
    pub fn with_secret(
        source: &'a WordSource,
        config: GameConfig,
        secret: Word,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        Ok(Self::from_parts(source, config, seeded_rng(config.seed), secret))
    }

    fn from_parts(source: &'a WordSource, config: GameConfig, rng: StdRng, secret: Word) -> Self {
        Self {
            source,
            config,
            rng,
            secret,
            grid: Grid::new(config.max_attempts),
            cursor: Cursor::default(),
            outcome: Outcome::InProgress,
            keyboard: KeyboardState::new(),
        }
    }

    /// Abandon the current game and start a fresh one with a new secret word
    pub fn new_game(&mut self) {
        self.secret = self.source.random_word(&mut self.rng).clone();
        self.grid = Grid::new(self.config.max_attempts);
        self.cursor = Cursor::default();
        self.outcome = Outcome::InProgress;
        self.keyboard.clear();
        log::debug!("new game started ({} rows)", self.config.max_attempts);
    }

    /// Apply one normalized key
    pub fn handle_key(&mut self, key: Key) -> Vec<GameEvent> {
        match key {
            Key::Letter(c) => self.submit_letter(c).into_iter().collect(),
            Key::Backspace => self.backspace().into_iter().collect(),
            Key::Enter => self.submit_row(),
        }
    }

    /// Type a letter at the cursor
    ///
    /// Ignored when the game is over, the row is full or `c` is not an ASCII
    /// letter.
    pub fn submit_letter(&mut self, c: char) -> Option<GameEvent> {
        if self.outcome.is_terminal() || self.cursor.col >= WORD_LENGTH || !c.is_ascii_alphabetic()
        {
            return None;
        }

        let letter = c.to_ascii_lowercase();
        let Cursor { row, col } = self.cursor;
        self.grid.row_mut(row).set_letter(col, letter as u8);
        self.cursor.col += 1;

        Some(GameEvent::LetterTyped { row, col, letter })
    }

    /// Erase the letter before the cursor
    ///
    /// Ignored when the game is over or the row is empty.
    pub fn backspace(&mut self) -> Option<GameEvent> {
        if self.outcome.is_terminal() || self.cursor.col == 0 {
            return None;
        }

        self.cursor.col -= 1;
        let Cursor { row, col } = self.cursor;
        self.grid.row_mut(row).clear_letter(col);

        Some(GameEvent::LetterErased { row, col })
    }

    /// Submit the current row
    ///
    /// Ignored (no events) unless the game is in progress and the row is full.
    /// An unknown word clears the row and yields [`GameEvent::InvalidWord`].
    /// A known word is evaluated and yields [`GameEvent::RowRevealed`],
    /// followed by [`GameEvent::Won`] or [`GameEvent::Lost`] when the game ends.
    pub fn submit_row(&mut self) -> Vec<GameEvent> {
        if self.outcome.is_terminal() || self.cursor.col < WORD_LENGTH {
            return Vec::new();
        }

        let row = self.cursor.row;
        let Some(letters) = self.grid.row(row).letters() else {
            return Vec::new();
        };

        if !self.source.contains(&letters) {
            let word = String::from_utf8_lossy(&letters).into_owned();
            log::debug!("rejected guess {word:?}: not in word list");
            self.grid.row_mut(row).clear();
            self.cursor.col = 0;
            return vec![GameEvent::InvalidWord { row, word }];
        }

        let Ok(guess) = Word::from_letters(letters) else {
            return Vec::new();
        };

        let feedback = Feedback::calculate(&guess, &self.secret);
        self.grid.row_mut(row).apply_feedback(&feedback);
        self.keyboard.record_row(&guess, &feedback);

        let mut events = vec![GameEvent::RowRevealed {
            row,
            guess: guess.clone(),
            feedback,
        }];

        if guess == self.secret {
            self.outcome = Outcome::Won;
            log::info!("game won in {} attempts", row + 1);
            events.push(GameEvent::Won { attempts: row + 1 });
        } else if row + 1 == self.config.max_attempts {
            self.outcome = Outcome::Lost;
            log::info!("game lost, the word was {}", self.secret);
            events.push(GameEvent::Lost {
                secret: self.secret.clone(),
            });
        } else {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }

        events
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Best known category per letter over all submitted rows
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The secret word; presentation decides when to reveal it
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    /// Number of rows submitted and evaluated so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.grid.evaluated_count()
    }

    #[must_use]
    pub const fn source(&self) -> &'a WordSource {
        self.source
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
