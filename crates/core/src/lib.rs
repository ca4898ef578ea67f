//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the movement, collision and game-state rules of the
//! frog crossing game. It has **zero dependencies** on UI, input devices or I/O:
//!
//! - **Deterministic**: Same seed produces the same lane layout, every reset
//! - **Testable**: Every rule is reachable from plain unit tests
//! - **Portable**: Any front end that can fill rectangles can draw it
//!
//! # Module Structure
//!
//! - [`sprite`]: axis-aligned rectangles with wraparound and fudged hit boxes
//! - [`group`]: a lane of identical sprites acting as one collidable unit
//! - [`layout`]: data-driven level description (lanes, backdrop, water band)
//! - [`game_state`]: the per-tick state machine, input routing, pause, reset
//! - [`rng`]: seeded LCG for lane start offsets
//! - [`snapshot`]: flattened, draw-ordered view of a frame
//!
//! # Game Rules
//!
//! Each tick, in lane order, a lane moves and is tested against the frog.
//! The first lethal lane that hits ends the round with `SPLAT`. A non-lethal
//! lane that hits carries the frog at its own speed. Reaching the top row
//! wins; standing still inside the water band ends with `SPLASH`.
//!
//! # Example
//!
//! ```
//! use tui_frogger_core::GameState;
//! use tui_frogger_types::{GameAction, Outcome};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveUp);
//! assert_eq!(game.frog().y, 580.0);
//!
//! game.tick();
//! assert_eq!(game.outcome(), Outcome::Playing);
//! ```

pub mod game_state;
pub mod group;
pub mod layout;
pub mod rng;
pub mod snapshot;
pub mod sprite;

pub use tui_frogger_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use group::{GroupSpec, SpriteGroup};
pub use layout::{BackdropSpec, LaneSpec, LevelLayout};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, Layer, SpriteRole, SpriteView};
pub use sprite::{Appearance, ImageRef, Sprite};
