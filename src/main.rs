//! Wordle - CLI
//!
//! Word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use wordle_game::{
    commands::{run_simple, score_guess},
    game::{DEFAULT_MAX_ATTEMPTS, Game, GameConfig},
    output::print_score,
    wordlists::{WordSource, loader::load_from_path},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file (one word per line, or JSON {"words": [...]})
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of attempts per game (1-20)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for secret word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words line by line)
    Simple,

    /// Show the feedback a guess gets against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

/// Load the word source based on the -w flag
fn load_word_source(wordlist: &str) -> Result<WordSource> {
    let source = if wordlist == "embedded" {
        WordSource::embedded()?
    } else {
        let words = load_from_path(Path::new(wordlist))
            .with_context(|| format!("Failed to load word list '{wordlist}'"))?;
        WordSource::new(words).with_context(|| format!("Word list '{wordlist}' is unusable"))?
    };

    log::info!("loaded {} words from {wordlist}", source.len());
    Ok(source)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let source = load_word_source(&cli.wordlist)?;
    let config = GameConfig {
        max_attempts: cli.attempts,
        seed: cli.seed,
    };
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&source, config),
        Commands::Simple => run_simple(&source, config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess, &source),
    }
}

fn run_score_command(secret: &str, guess: &str, source: &WordSource) -> Result<()> {
    let result = score_guess(secret, guess, source).map_err(|e| anyhow::anyhow!(e))?;
    print_score(&result.guess, &result.secret, &result.feedback);
    Ok(())
}

fn run_play_command(source: &WordSource, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let game = Game::new(source, config)?;
    run_tui(App::new(game))
}
