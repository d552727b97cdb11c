//! Word lists for the game
//!
//! Provides the embedded word list, file loaders and the `WordSource` used by
//! the engine to draw secret words and validate guesses.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::LoadError;
pub use source::{SetupError, WordSource};
