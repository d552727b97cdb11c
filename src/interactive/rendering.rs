//! TUI rendering with ratatui
//!
//! Grid, keyboard, messages and status bar for the game.

use super::app::{App, MessageStyle};
use crate::core::{KeyboardState, LetterState, WORD_LENGTH};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Grid
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0], now);
    render_side_panel(f, app, main_chunks[1], now);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: Option<LetterState>) -> Style {
    match state {
        Some(LetterState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: Option<char>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(
        || " · ".to_string(),
        |c| format!(" {} ", c.to_ascii_uppercase()),
    );
    Span::styled(text, style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let cursor = app.game.cursor();
    let mut lines = vec![Line::from("")];

    for (row_index, row) in app.game.grid().rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        match &app.shake {
            Some(shake) if shake.row == row_index => {
                // Rejected letters, nudged sideways while the row shakes
                spans.push(Span::raw(" "));
                for c in shake.word.chars() {
                    spans.push(tile(
                        Some(c),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw(" "));
                }
            }
            _ => {
                for (col, cell) in row.cells().iter().enumerate() {
                    let mut style = tile_style(app.visible_state(row_index, col, now));
                    if !app.game.is_over() && cursor.row == row_index && cursor.col == col {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    spans.push(tile(cell.letter(), style));
                    spans.push(Span::raw(" "));
                }
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Attempt {}/{} ",
                (cursor.row + 1).min(app.game.max_attempts()),
                app.game.max_attempts()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, &app.visible_keyboard(), chunks[0]);
    render_messages(f, app, chunks[1], now);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let mut lines = vec![Line::from("")];
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .bytes()
            .flat_map(|letter| {
                let style = match keyboard.get(letter) {
                    None => Style::default().fg(Color::White).bg(Color::Gray),
                    state => tile_style(state),
                };
                [
                    tile(Some(char::from(letter)), style),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .filter(|msg| msg.is_visible(now))
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let distribution: Vec<String> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(attempts, count)| format!("{attempts}:{count}"))
        .collect();
    let distribution = Paragraph::new(distribution.join(" ")).alignment(Alignment::Center);
    f.render_widget(distribution, chunks[1]);

    let help_text = if app.game.is_over() {
        "Enter: Next Game | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
