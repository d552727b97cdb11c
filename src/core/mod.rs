//! Core domain types for the game
//!
//! Pure types with no I/O: words, per-letter feedback and the keyboard
//! aggregate. Everything here is deterministic and unit-testable.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterState};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
