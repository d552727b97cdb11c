//! Interactive TUI interface
//!
//! Terminal frontend for the engine: maps key presses to engine keys and
//! animates the events it returns.

mod app;
mod rendering;

pub use app::{
    App, END_MESSAGE_DURATION, Input, Message, MessageStyle, NOTICE_DURATION, REVEAL_STEP,
    Reveal, SHAKE_DURATION, Shake, map_key, run_tui,
};
pub use rendering::ui;
