//! Wordle Game
//!
//! A word guessing game engine: six tries to find a five-letter word, with
//! per-letter feedback after each guess, plus terminal frontends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let secret = Word::new("apple").unwrap();
//! let guess = Word::new("paper").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! assert_eq!(feedback.to_emoji(), "🟨🟨🟩🟨⬜");
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
