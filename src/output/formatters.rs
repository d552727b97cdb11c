//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, LetterState, Word};
use colored::{ColoredString, Colorize};

/// QWERTY layout used for keyboard summaries
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render one letter tile colored by its category
#[must_use]
pub fn colored_letter(letter: char, state: Option<LetterState>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => tile.black().on_green().bold(),
        Some(LetterState::Present) => tile.black().on_yellow().bold(),
        Some(LetterState::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// Render an evaluated guess as colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.states())
        .map(|(letter, &state)| colored_letter(letter, Some(state)).to_string())
        .collect()
}

/// Render one keyboard row, coloring the letters that have been played
#[must_use]
pub fn keyboard_line(keyboard: &KeyboardState, row: &str) -> String {
    row.bytes()
        .map(|letter| colored_letter(char::from(letter), keyboard.get(letter)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn colored_guess_plain_text() {
        plain();
        let guess = Word::new("paper").unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("apple").unwrap());
        assert_eq!(colored_guess(&guess, &feedback), " P  A  P  E  R ");
    }

    #[test]
    fn keyboard_line_plain_text() {
        plain();
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard_line(&keyboard, "zxc"), " Z  X  C ");
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|row| row.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
