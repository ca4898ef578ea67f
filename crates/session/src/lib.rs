//! Session layer: configuration, outcome journal, and the game/journal pair
//! the binary drives.

pub mod config;
pub mod journal;
pub mod session;

pub use tui_frogger_core as core;
pub use tui_frogger_types as types;

pub use config::SessionConfig;
pub use journal::{read_entries, Journal, JournalEntry, JournalEvent};
pub use session::Session;
