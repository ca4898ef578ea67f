//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and collects the
//! presses that arrive between two frames into a bounded [`ActionBatch`].

pub mod batch;
pub mod map;

pub use tui_frogger_types as types;

pub use batch::{ActionBatch, MAX_ACTIONS_PER_FRAME};
pub use map::{action_for_event, handle_key_event, should_quit};
