//! Per-letter keyboard aggregate
//!
//! Tracks the best feedback ever observed for each letter across finalized
//! rows. Merging only ever upgrades (`Absent < Present < Correct`).

use super::{Feedback, LetterState, Word};
use rustc_hash::FxHashMap;

/// Best known category per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the aggregate from scratch over a set of finalized rows
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        let mut keyboard = Self::new();
        for (guess, feedback) in rows {
            keyboard.record_row(guess, feedback);
        }
        keyboard
    }

    /// Merge one observation; a letter is never downgraded
    pub fn record(&mut self, letter: u8, state: LetterState) {
        let letter = letter.to_ascii_lowercase();
        self.letters
            .entry(letter)
            .and_modify(|best| *best = (*best).max(state))
            .or_insert(state);
    }

    /// Merge every cell of an evaluated row
    pub fn record_row(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            self.record(letter, state);
        }
    }

    /// Best category seen for a letter, if it has been played
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterState> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of distinct letters played so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Played letters in alphabetical order with their category
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        (b'a'..=b'z').filter_map(|letter| self.get(letter).map(|state| (letter, state)))
    }
}
