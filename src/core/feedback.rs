//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess is classified as:
//! - `Absent`: letter not in the secret, or all its occurrences already used
//! - `Present`: letter in the secret, wrong position
//! - `Correct`: letter in the correct position
//!
//! Categories are ordered `Absent < Present < Correct`, which is the precedence
//! used when several rows report on the same letter.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback category for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji square for this category
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Feedback for a whole guess, one category per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// Every position correct
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Create feedback from explicit categories
    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Get the categories in position order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Handles duplicate letters so that a letter is never reported as
    /// correct or present more often than it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. Count the letters of the secret
    /// 2. First pass: mark exact matches correct and remove them from the pool
    /// 3. Second pass, left to right over the rest: present while the pool
    ///    still holds the letter, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("paper").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.to_string(), "YYGY-");
    /// assert_eq!(feedback.states()[2], LetterState::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left in the pool
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            let ch = match state {
                LetterState::Correct => 'G',
                LetterState::Present => 'Y',
                LetterState::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    // "GY-GY" style: G correct, Y present, anything else absent
    fn pattern(s: &str) -> Feedback {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        for (slot, ch) in states.iter_mut().zip(s.chars()) {
            *slot = match ch {
                'G' => LetterState::Correct,
                'Y' => LetterState::Present,
                _ => LetterState::Absent,
            };
        }
        Feedback::new(states)
    }

    #[test]
    fn exact_guess_is_all_correct() {
        for word in ["apple", "crane", "aaaaa", "speed"] {
            let feedback = score(word, word);
            assert_eq!(feedback, Feedback::PERFECT);
            assert!(feedback.is_perfect());
        }
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        let feedback = score("brick", "apple");
        assert_eq!(feedback, pattern("-----"));
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn paper_against_apple() {
        // p present, a present, p correct, e present, r absent
        let feedback = score("paper", "apple");
        assert_eq!(
            feedback.states(),
            &[
                LetterState::Present,
                LetterState::Present,
                LetterState::Correct,
                LetterState::Present,
                LetterState::Absent,
            ]
        );
    }

    #[test]
    fn correct_match_claims_letter_before_present() {
        // both 'l's of HELLO are claimed by exact matches, so the other 'l's
        // in the guess are absent
        assert_eq!(score("lllll", "hello"), pattern("--GG-"));
        assert_eq!(score("llama", "hello"), pattern("YY---"));
        assert_eq!(score("geese", "erase"), pattern("-Y-GG"));
    }

    #[test]
    fn duplicate_guess_letters_limited_by_secret_count() {
        // ROBOT vs FLOOR: first O present, second O correct
        assert_eq!(score("robot", "floor"), pattern("YY-G-"));
        // SPEED vs ERASE: both E present, ERASE has two
        assert_eq!(score("speed", "erase"), pattern("Y-YY-"));
        // EERIE vs APPLE: only the final E matches
        assert_eq!(score("eerie", "apple"), pattern("----G"));
    }

    #[test]
    fn matched_letters_never_exceed_secret_multiplicity() {
        let words = [
            "apple", "paper", "llama", "hello", "speed", "erase", "geese", "eerie", "sassy",
            "robot", "floor", "aaaaa", "crane",
        ];

        for secret in words {
            for guess in words {
                let feedback = score(guess, secret);
                let secret_word = Word::new(secret).unwrap();
                let counts = secret_word.char_counts();

                for letter in guess.bytes() {
                    let matched = guess
                        .bytes()
                        .zip(feedback.states())
                        .filter(|&(g, &s)| g == letter && s != LetterState::Absent)
                        .count();
                    let available = usize::from(counts.get(&letter).copied().unwrap_or(0));
                    assert!(
                        matched <= available,
                        "{guess} vs {secret}: '{}' matched {matched} times, secret has {available}",
                        char::from(letter)
                    );
                }
            }
        }
    }

    #[test]
    fn every_positional_match_is_correct() {
        let words = ["apple", "paper", "llama", "hello", "speed", "sassy"];
        for secret in words {
            for guess in words {
                let feedback = score(guess, secret);
                for (i, (g, s)) in guess.bytes().zip(secret.bytes()).enumerate() {
                    assert_eq!(g == s, feedback.states()[i] == LetterState::Correct);
                }
            }
        }
    }

    #[test]
    fn calculation_is_deterministic() {
        assert_eq!(score("sassy", "assay"), score("sassy", "assay"));
    }

    #[test]
    fn letter_state_precedence() {
        assert!(LetterState::Correct > LetterState::Present);
        assert!(LetterState::Present > LetterState::Absent);
    }

    #[test]
    fn display_and_emoji() {
        let feedback = pattern("GY-GY");
        assert_eq!(feedback.to_string(), "GY-GY");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(LetterState::Present.to_string(), "present");
    }
}
