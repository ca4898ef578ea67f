//! Shared vocabulary of the frog game: field geometry, colors, obstacle
//! kinds, round outcomes and player actions.
//!
//! Plain data with no dependencies, shared by the core, the terminal view
//! and the session journal.
//!
//! # Field Geometry
//!
//! The play field is measured in field pixels, independent of any output device:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_WIDTH` | 800 | Play field width |
//! | `FIELD_HEIGHT` | 640 | Play field height |
//! | `FROG_SIZE` | 40 | Frog side length, also the height of a road/river row |
//! | `LANE_GAP` | 20 | Vertical gap between rows (half a frog) |
//! | `LANE_HEIGHT` | 60 | Distance between two lane origins |
//! | `FUDGE` | 7 | Hit box shrink (lethal) or growth (non-lethal) per side |
//!
//! # Timing
//!
//! The engine advances one fixed step per frame. `TICK_MS` is only the
//! frame interval used by the terminal runner; the core never looks at time.
//!
//! # Examples
//!
//! ```
//! use tui_frogger_types::{GameAction, LossCause, Outcome, FIELD_WIDTH};
//!
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::MoveUp);
//!
//! let outcome = Outcome::Lost(LossCause::Splash);
//! assert_eq!(outcome.banner(), "SPLASH");
//! assert!(outcome.is_terminal());
//!
//! assert_eq!(FIELD_WIDTH, 800.0);
//! ```

/// Play field width in field pixels.
pub const FIELD_WIDTH: f32 = 800.0;

/// Play field height in field pixels.
pub const FIELD_HEIGHT: f32 = 640.0;

/// Frog side length.
pub const FROG_SIZE: f32 = 40.0;

/// Gap between two rows (half a frog).
pub const LANE_GAP: f32 = FROG_SIZE / 2.0;

/// Distance between the origins of two consecutive lanes.
pub const LANE_HEIGHT: f32 = FROG_SIZE + LANE_GAP;

/// Hit box adjustment applied on each side during collision tests.
pub const FUDGE: f32 = 7.0;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Play field bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    /// The 800x640 field of the classic level.
    pub const CLASSIC: Field = Field {
        width: FIELD_WIDTH,
        height: FIELD_HEIGHT,
    };

    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite(),
            "field must have a positive finite size, got {width}x{height}"
        );
        Self { width, height }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// Colors used by the classic level.
pub mod palette {
    use super::Rgb;

    pub const WATER: Rgb = Rgb::from_hex(0x0066cc);
    pub const MEDIAN: Rgb = Rgb::new(128, 128, 128);
    pub const GOAL: Rgb = Rgb::from_hex(0x660066);
    pub const FROG: Rgb = Rgb::from_hex(0x339900);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const SPLAT: Rgb = Rgb::new(255, 0, 0);
    pub const SPLASH: Rgb = Rgb::new(0, 0, 255);
    pub const WIN: Rgb = Rgb::new(255, 255, 0);
}

/// Kind of obstacle hosted by a lane.
///
/// Road traffic kills on contact; river traffic carries the frog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Car,
    Truck,
    Log,
    Turtle,
}

impl ObstacleKind {
    pub fn is_lethal(&self) -> bool {
        matches!(self, ObstacleKind::Car | ObstacleKind::Truck)
    }
}

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossCause {
    /// Hit by road traffic.
    Splat,
    /// Stood in open water without riding anything.
    Splash,
}

/// Result of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Lost(LossCause),
    Won,
}

impl Outcome {
    /// Text shown over the field for this outcome.
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::Playing => "",
            Outcome::Lost(LossCause::Splat) => "SPLAT",
            Outcome::Lost(LossCause::Splash) => "SPLASH",
            Outcome::Won => "YOU WIN",
        }
    }

    /// Banner color.
    pub fn color(&self) -> Rgb {
        match self {
            Outcome::Playing => palette::WHITE,
            Outcome::Lost(LossCause::Splat) => palette::SPLAT,
            Outcome::Lost(LossCause::Splash) => palette::SPLASH,
            Outcome::Won => palette::WIN,
        }
    }

    /// True once the round has ended (won or lost).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    TogglePause,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Reset,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::TogglePause => "togglePause",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Reset => "reset",
        }
    }}
