//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map field pixels to character cells in one place ([`GameView`])
//! - Flush only what changed between frames ([`TerminalRenderer`])

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_frogger_core as core;
pub use tui_frogger_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{draw_text_rel, AnchorY, FieldRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
