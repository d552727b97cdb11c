//! Engine input keys and output events

use crate::core::{Feedback, Word};

/// Normalized key accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A letter, lowercase `a`-`z`
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Normalize a single character; anything but an ASCII letter is dropped
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_lowercase()))
    }

    /// Normalize a key name such as `"a"`, `"Q"`, `"Backspace"` or `"Enter"`
    ///
    /// Names are case-insensitive; unknown keys give `None`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Key;
    ///
    /// assert_eq!(Key::parse("Q"), Some(Key::Letter('q')));
    /// assert_eq!(Key::parse("enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }

        if name.eq_ignore_ascii_case("backspace") {
            Some(Self::Backspace)
        } else if name.eq_ignore_ascii_case("enter") {
            Some(Self::Enter)
        } else {
            None
        }
    }
}

/// Display instruction emitted by the engine
///
/// Events describe state changes that already happened; presentation decides
/// how and when to show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A letter was written at (row, col)
    LetterTyped { row: usize, col: usize, letter: char },
    /// The letter at (row, col) was erased
    LetterErased { row: usize, col: usize },
    /// The row did not spell a known word and was cleared
    InvalidWord { row: usize, word: String },
    /// The row was evaluated
    RowRevealed {
        row: usize,
        guess: Word,
        feedback: Feedback,
    },
    /// The secret word was found after `attempts` rows
    Won { attempts: usize },
    /// All rows were used; the secret is revealed
    Lost { secret: Word },
}

impl GameEvent {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}
