//! Score command
//!
//! Evaluates a single guess against a chosen secret word.

use crate::core::{Feedback, Word};
use crate::wordlists::WordSource;

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (not 5 letters or contains non-letters)
/// - The guess is not in the word list
pub fn score_guess(
    secret: &str,
    guess: &str,
    source: &WordSource,
) -> Result<ScoreResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if !source.contains(guess_word.chars()) {
        return Err(format!("Word '{guess}' not in word list"));
    }

    let feedback = Feedback::calculate(&guess_word, &secret);

    Ok(ScoreResult {
        secret,
        guess: guess_word,
        feedback,
    })
}
