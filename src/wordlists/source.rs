//! Word source for the engine
//!
//! The set of playable words: secret words are drawn from it uniformly and
//! every submitted guess must belong to it.

use super::loader::words_from_slice;
use super::WORDS;
use crate::core::{WORD_LENGTH, Word};
use crate::game::MAX_ATTEMPTS;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Failure that prevents a game from starting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The word list holds no playable word
    EmptyWordList,
    /// Row count outside `1..=MAX_ATTEMPTS`
    InvalidAttempts(usize),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "No words available to play with"),
            Self::InvalidAttempts(n) => {
                write!(f, "Attempts must be between 1 and {MAX_ATTEMPTS}, got {n}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Non-empty collection of playable words with O(1) membership checks
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordSource {
    /// Build a source from a list of words
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    ///
    /// # Errors
    /// Returns `SetupError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SetupError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word.chars()))
            .collect();

        if words.is_empty() {
            return Err(SetupError::EmptyWordList);
        }

        log::info!("word source ready with {} words", words.len());
        Ok(Self { words, index })
    }

    /// Build a source from the embedded word list
    ///
    /// # Errors
    /// Returns `SetupError::EmptyWordList` if the embedded list is empty.
    pub fn embedded() -> Result<Self, SetupError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Check whether typed letters form a playable word
    #[inline]
    #[must_use]
    pub fn contains(&self, letters: &[u8; WORD_LENGTH]) -> bool {
        self.index.contains(letters)
    }

    /// Draw a word uniformly at random
    pub fn random_word<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
