//! Display functions for game state and command results

use super::formatters::{KEYBOARD_ROWS, colored_guess, colored_letter, keyboard_line};
use crate::core::{Feedback, KeyboardState, Word};
use crate::game::Game;
use colored::Colorize;

/// Print the result of scoring a guess against a secret word
pub fn print_score(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.text().to_uppercase().bright_yellow().bold(),
        guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(guess, feedback));
    println!("  {}  {}", feedback.to_emoji(), feedback);

    for (letter, state) in guess.text().chars().zip(feedback.states()) {
        println!("    {} {state}", letter.to_ascii_uppercase());
    }

    if feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print every row of the grid: evaluated rows colored, the open row as typed
pub fn print_board(game: &Game) {
    println!();
    for row in game.grid().rows() {
        let line: String = row
            .cells()
            .iter()
            .map(|cell| colored_letter(cell.letter().unwrap_or('·'), cell.state()).to_string())
            .collect();
        println!("  {line}");
    }
    println!();
}

/// Print the keyboard with the best known category per letter
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        println!("  {}{}", " ".repeat(indent * 2), keyboard_line(keyboard, row));
    }
    println!();
}
