use crate::sprite::{Appearance, Sprite};
use crate::types::{Field, ObstacleKind, Outcome};

/// Draw layer. Lower layers are drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Backdrop,
    Obstacle,
    Goal,
    Frog,
}

/// Which entity a [`SpriteView`] was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteRole {
    Backdrop,
    Obstacle(ObstacleKind),
    Goal,
    Frog,
}

/// One rectangle to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub appearance: Appearance,
    pub layer: Layer,
    pub role: SpriteRole,
}

impl SpriteView {
    pub fn from_sprite(sprite: &Sprite, layer: Layer, role: SpriteRole) -> Self {
        Self {
            x: sprite.x,
            y: sprite.y,
            width: sprite.width(),
            height: sprite.height(),
            appearance: sprite.appearance(),
            layer,
            role,
        }
    }
}

/// Everything a front end needs to draw one frame.
///
/// `sprites` is already in draw order: backdrop, lanes (in lane order),
/// goal, frog.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub field: Field,
    pub sprites: Vec<SpriteView>,
    pub outcome: Outcome,
    pub paused: bool,
    pub episode_id: u32,
    pub tick: u64,
    pub seed: u32,
}

impl GameSnapshot {
    /// Reset to an empty frame, keeping the sprite buffer's allocation.
    pub fn clear(&mut self) {
        self.field = Field::CLASSIC;
        self.sprites.clear();
        self.outcome = Outcome::Playing;
        self.paused = false;
        self.episode_id = 0;
        self.tick = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal() && !self.paused
    }

    /// The frog's view, if present.
    pub fn frog(&self) -> Option<&SpriteView> {
        self.sprites.iter().rev().find(|s| s.role == SpriteRole::Frog)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: Field::CLASSIC,
            sprites: Vec::new(),
            outcome: Outcome::Playing,
            paused: false,
            episode_id: 0,
            tick: 0,
            seed: 0,
        }
    }
}
