//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is typed into the engine as keys.

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameConfig, GameEvent, Key, Outcome, Statistics};
use crate::output::formatters::{colored_guess, create_progress_bar};
use crate::output::{print_board, print_keyboard};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Guess(Vec<Key>),
    Invalid(String),
}

/// Interpret a line typed by the player
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "exit" | ":q" => return LineCommand::Quit,
        "new" | ":n" => return LineCommand::NewGame,
        _ => {}
    }

    let keys: Option<Vec<Key>> = line.chars().map(Key::from_char).collect();
    match keys {
        Some(keys) if keys.len() == WORD_LENGTH => LineCommand::Guess(keys),
        Some(_) => LineCommand::Invalid(format!("Word must be exactly {WORD_LENGTH} letters!")),
        None => LineCommand::Invalid("Only letters a-z are allowed!".to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the game cannot be set up or there's an I/O error
/// reading user input.
pub fn run_simple(source: &WordSource, config: GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut game = Game::new(source, config).map_err(|e| e.to_string())?;
    let mut stats = Statistics::new(game.max_attempts());

    println!(
        "Guess the {WORD_LENGTH}-letter word in {} tries.",
        game.max_attempts()
    );
    println!(
        "  {} right spot   {} wrong spot   {} not in word",
        " G ".black().on_green(),
        " Y ".black().on_yellow(),
        " - ".white().on_bright_black()
    );
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    loop {
        let prompt = format!("Guess {}/{}", game.cursor().row + 1, game.max_attempts());
        let Some(line) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let keys = match parse_line(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::NewGame => {
                game.new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            LineCommand::Invalid(message) => {
                println!("❌ {message}\n");
                continue;
            }
            LineCommand::Guess(keys) => keys,
        };

        let mut events = Vec::new();
        for key in keys.into_iter().chain([Key::Enter]) {
            events.extend(game.handle_key(key));
        }

        let finished = events.iter().any(GameEvent::is_terminal);
        for event in events {
            match event {
                GameEvent::InvalidWord { word, .. } => {
                    println!(
                        "❌ {} is not a valid word!\n",
                        word.to_uppercase().bright_white().bold()
                    );
                }
                GameEvent::RowRevealed { guess, feedback, .. } => {
                    println!("  {}", colored_guess(&guess, &feedback));
                    print_board(&game);
                    print_keyboard(game.keyboard());
                }
                GameEvent::Won { attempts } => {
                    stats.record(Outcome::Won, attempts);
                    println!(
                        "{}",
                        format!(
                            "🎉 Awesome! You found the word in {attempts} {}!",
                            if attempts == 1 { "guess" } else { "guesses" }
                        )
                        .bright_green()
                        .bold()
                    );
                }
                GameEvent::Lost { secret } => {
                    stats.record(Outcome::Lost, game.attempts_used());
                    println!(
                        "{} {}",
                        "You lost! The word was:".red().bold(),
                        secret.text().to_uppercase().bright_yellow().bold()
                    );
                }
                GameEvent::LetterTyped { .. } | GameEvent::LetterErased { .. } => {}
            }
        }

        if finished {
            print_statistics(&stats);

            let again = get_user_input("Play again? (yes/no)")?
                .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y" | ""));

            if !again {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            game.new_game();
            println!("\n🔄 New game started!\n");
        }
    }
}

fn print_statistics(stats: &Statistics) {
    println!(
        "\n  Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        println!("  {attempts}: {} {count}", bar.green());
    }
    println!();
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess_line() {
        let command = parse_line("  Apple ");
        assert_eq!(
            command,
            LineCommand::Guess(vec![
                Key::Letter('a'),
                Key::Letter('p'),
                Key::Letter('p'),
                Key::Letter('l'),
                Key::Letter('e'),
            ])
        );
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_line("quit"), LineCommand::Quit);
        assert_eq!(parse_line("EXIT"), LineCommand::Quit);
        assert_eq!(parse_line("new"), LineCommand::NewGame);
    }

    #[test]
    fn parse_wrong_length() {
        assert!(matches!(parse_line("app"), LineCommand::Invalid(_)));
        assert!(matches!(parse_line("apples"), LineCommand::Invalid(_)));
        assert!(matches!(parse_line(""), LineCommand::Invalid(_)));
    }

    #[test]
    fn parse_non_letters() {
        assert_eq!(
            parse_line("ap le"),
            LineCommand::Invalid("Only letters a-z are allowed!".to_string())
        );
        assert!(matches!(parse_line("appl3"), LineCommand::Invalid(_)));
    }

    #[test]
    fn guess_keys_drive_the_engine() {
        use crate::core::Word;
        use crate::wordlists::loader::words_from_slice;

        let source = WordSource::new(words_from_slice(&["apple", "paper"])).unwrap();
        let mut game = Game::with_secret(
            &source,
            GameConfig::default(),
            Word::new("apple").unwrap(),
        )
        .unwrap();

        let LineCommand::Guess(keys) = parse_line("APPLE") else {
            panic!("expected a guess");
        };
        let events: Vec<GameEvent> = keys
            .into_iter()
            .chain([Key::Enter])
            .flat_map(|key| game.handle_key(key))
            .collect();

        assert_eq!(events.last(), Some(&GameEvent::Won { attempts: 1 }));
    }
}
