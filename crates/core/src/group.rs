//! Sprite groups - one lane of identical obstacles acting as a unit

use crate::sprite::{Appearance, Sprite};
use crate::types::{Field, ObstacleKind};

/// Construction parameters for a [`SpriteGroup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSpec {
    /// x of the first member.
    pub x: f32,
    /// Lane y shared by every member.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub appearance: Appearance,
    pub speed: f32,
    pub count: usize,
    pub lethal: bool,
    /// Gap between members; `None` means half a member width.
    pub spacing: Option<f32>,
    pub kind: ObstacleKind,
}

/// Fixed row of identical sprites sharing lane, speed and lethality.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteGroup {
    sprites: Vec<Sprite>,
    speed: f32,
    lethal: bool,
    kind: ObstacleKind,
}

impl SpriteGroup {
    /// Lay out `spec.count` sprites left to right, wrapping past the right edge.
    ///
    /// # Panics
    ///
    /// Panics if `spec.count` is zero or the member size is not positive.
    pub fn new(field: &Field, spec: &GroupSpec) -> Self {
        assert!(spec.count > 0, "sprite group needs at least one member");
        let spacing = spec.spacing.unwrap_or(spec.width / 2.0);

        let mut sprites = Vec::with_capacity(spec.count);
        let mut x = spec.x;
        for _ in 0..spec.count {
            sprites.push(Sprite::new(
                x,
                spec.y,
                spec.width,
                spec.height,
                spec.appearance,
                spec.speed,
                spec.lethal,
            ));

            if x + spec.width > field.width {
                x = spacing - (field.width - x);
            } else {
                x += spec.width + spacing;
            }
        }

        Self {
            sprites,
            speed: spec.speed,
            lethal: spec.lethal,
            kind: spec.kind,
        }
    }

    pub fn update(&mut self, field: &Field) {
        for s in &mut self.sprites {
            s.update(field);
        }
    }

    /// True if any member hits the player (members are the collision subject).
    pub fn collides_with_player(&self, player: &Sprite) -> bool {
        self.sprites.iter().any(|s| s.collides_with(player))
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_lethal(&self) -> bool {
        self.lethal
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
