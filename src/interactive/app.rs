//! TUI application state and logic
//!
//! The engine decides everything synchronously; this layer only schedules how
//! the results are shown (staggered reveal, shake, expiring messages,
//! automatic restart).

use crate::core::{KeyboardState, LetterState};
use crate::game::{Game, GameEvent, Key, Outcome, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Delay between two cells of a row reveal
pub const REVEAL_STEP: Duration = Duration::from_millis(300);
/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);
/// How long the invalid word notice stays up
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);
/// How long the win/loss message stays up before the next game
pub const END_MESSAGE_DURATION: Duration = Duration::from_secs(3);

const TICK: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub reveal: Option<Reveal>,
    pub shake: Option<Shake>,
    pub restart_at: Option<Instant>,
}

/// Row being revealed cell by cell
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
}

impl Reveal {
    /// Instant at which the last cell is shown
    #[must_use]
    pub fn finished_at(&self) -> Instant {
        self.started + REVEAL_STEP * crate::core::WORD_LENGTH as u32
    }

    /// Whether cell `col` is already flipped at `now`
    #[must_use]
    pub fn shows(&self, col: usize, now: Instant) -> bool {
        now >= self.started + REVEAL_STEP * (col as u32 + 1)
    }
}

/// Rejected row, displayed with its letters until `until`
#[derive(Debug, Clone)]
pub struct Shake {
    pub row: usize,
    pub word: String,
    pub until: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub shows_at: Instant,
    pub expires_at: Instant,
}

impl Message {
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.shows_at <= now && now < self.expires_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a terminal key press means to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Game(Key),
    Ignore,
}

/// Translate a terminal key event into application input
#[must_use]
pub fn map_key(key: KeyEvent) -> Input {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return Input::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Esc => Input::Quit,
        KeyCode::Char(c) => Key::from_char(c).map_or(Input::Ignore, Input::Game),
        KeyCode::Backspace => Input::Game(Key::Backspace),
        KeyCode::Enter => Input::Game(Key::Enter),
        _ => Input::Ignore,
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        let stats = Statistics::new(game.max_attempts());
        Self {
            game,
            messages: Vec::new(),
            stats,
            should_quit: false,
            reveal: None,
            shake: None,
            restart_at: None,
        }
    }

    /// Feed one key to the game and schedule the resulting display effects
    pub fn handle_input(&mut self, key: Key, now: Instant) {
        if self.game.is_over() {
            if key == Key::Enter {
                self.start_new_game();
            }
            return;
        }

        let events = self.game.handle_key(key);
        self.apply_events(events, now);
    }

    fn apply_events(&mut self, events: Vec<GameEvent>, now: Instant) {
        for event in events {
            match event {
                GameEvent::InvalidWord { row, word } => {
                    self.shake = Some(Shake {
                        row,
                        word,
                        until: now + SHAKE_DURATION,
                    });
                    self.add_message(
                        "This is not a valid word!",
                        MessageStyle::Error,
                        now,
                        NOTICE_DURATION,
                    );
                }
                GameEvent::RowRevealed { row, .. } => {
                    self.reveal = Some(Reveal { row, started: now });
                }
                GameEvent::Won { attempts } => {
                    self.stats.record(Outcome::Won, attempts);

                    let celebration = match attempts {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        6 => "😅 PHEW! Got it in six! 😅",
                        _ => "🎊 Awesome! You found the word! 🎊",
                    };
                    self.schedule_end_message(celebration.to_string(), MessageStyle::Success, now);
                }
                GameEvent::Lost { secret } => {
                    self.stats.record(Outcome::Lost, self.game.attempts_used());
                    let text = format!(
                        "You lost! The word was: {}",
                        secret.text().to_uppercase()
                    );
                    self.schedule_end_message(text, MessageStyle::Error, now);
                }
                GameEvent::LetterTyped { .. } | GameEvent::LetterErased { .. } => {}
            }
        }
    }

    /// End messages wait for the reveal to finish; the next game follows them
    fn schedule_end_message(&mut self, text: String, style: MessageStyle, now: Instant) {
        let shows_at = self.reveal.map_or(now, |reveal| reveal.finished_at());
        let expires_at = shows_at + END_MESSAGE_DURATION;

        self.push_message(Message {
            text,
            style,
            shows_at,
            expires_at,
        });
        self.restart_at = Some(expires_at);
    }

    /// Advance timers: drop finished effects and start the next game when due
    pub fn on_tick(&mut self, now: Instant) {
        self.messages.retain(|msg| now < msg.expires_at);

        if self.shake.as_ref().is_some_and(|shake| now >= shake.until) {
            self.shake = None;
        }
        if self.reveal.is_some_and(|reveal| now >= reveal.finished_at()) {
            self.reveal = None;
        }
        if self.restart_at.is_some_and(|at| now >= at) {
            self.start_new_game();
        }
    }

    pub fn start_new_game(&mut self) {
        self.game.new_game();
        self.reveal = None;
        self.shake = None;
        self.restart_at = None;
        self.messages.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle, now: Instant, ttl: Duration) {
        self.push_message(Message {
            text: text.to_string(),
            style,
            shows_at: now,
            expires_at: now + ttl,
        });
    }

    fn push_message(&mut self, message: Message) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Category to draw for a cell at `now`, hiding cells not yet revealed
    #[must_use]
    pub fn visible_state(&self, row: usize, col: usize, now: Instant) -> Option<LetterState> {
        let state = self.game.grid().row(row).cells()[col].state();
        match self.reveal {
            Some(reveal) if reveal.row == row && !reveal.shows(col, now) => None,
            _ => state,
        }
    }

    /// Keyboard colors, leaving out the row still being revealed
    #[must_use]
    pub fn visible_keyboard(&self) -> KeyboardState {
        match self.reveal {
            Some(reveal) => {
                let rows = self.game.grid().rows();
                let evaluations: Vec<_> = rows
                    .iter()
                    .enumerate()
                    .filter(|&(index, _)| index != reveal.row)
                    .filter_map(|(_, row)| row.evaluation())
                    .collect();
                KeyboardState::from_rows(evaluations.iter().map(|(g, f)| (g, f)))
            }
            None => self.game.keyboard().clone(),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("TUI stopped: {err}");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.on_tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            match map_key(key) {
                Input::Quit => app.should_quit = true,
                Input::Game(key) => app.handle_input(key, Instant::now()),
                Input::Ignore => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
