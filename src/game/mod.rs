//! Game engine
//!
//! Owns one game: the secret word, the attempt grid, the cursor and the
//! outcome. It consumes normalized keys and answers with display events; it
//! never renders or waits on timers.

mod config;
mod engine;
mod event;
mod grid;
mod stats;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS};
pub use engine::{Game, Outcome};
pub use event::{GameEvent, Key};
pub use grid::{Cell, Cursor, Grid, Row};
pub use stats::Statistics;
