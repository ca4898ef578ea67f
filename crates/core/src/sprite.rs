//! Sprite module - axis-aligned rectangles with wraparound movement
//!
//! A [`Sprite`] is the single entity type of the game: backdrop strips, the
//! goal row, every obstacle and the frog itself. Behaviour differs only by
//! data (speed, lethal flag), never by type.

use crate::types::{Field, Rgb, FUDGE};

/// External image asset referenced by logical path.
///
/// The core only uses the reported size. `tint` is the color a front end
/// without image support draws instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRef {
    pub path: &'static str,
    pub width: f32,
    pub height: f32,
    pub tint: Rgb,
}

impl ImageRef {
    pub const fn new(path: &'static str, width: f32, height: f32, tint: Rgb) -> Self {
        Self {
            path,
            width,
            height,
            tint,
        }
    }
}

/// How a sprite is drawn, resolved once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    Fill(Rgb),
    Image(ImageRef),
}

impl Appearance {
    /// Flat color for this appearance (the tint for images).
    pub fn color(&self) -> Rgb {
        match self {
            Appearance::Fill(c) => *c,
            Appearance::Image(img) => img.tint,
        }
    }
}

/// Axis-aligned rectangle moving horizontally at constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    width: f32,
    height: f32,
    /// Horizontal velocity per tick. Zero means stationary.
    pub speed: f32,
    lethal: bool,
    appearance: Appearance,
}

impl Sprite {
    /// Create a sprite.
    ///
    /// # Panics
    ///
    /// Panics if the size is not positive and finite.
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        appearance: Appearance,
        speed: f32,
        lethal: bool,
    ) -> Self {
        assert!(
            width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite(),
            "sprite size must be positive and finite, got {width}x{height}"
        );
        assert!(speed.is_finite(), "sprite speed must be finite");
        Self {
            x,
            y,
            width,
            height,
            speed,
            lethal,
            appearance,
        }
    }

    /// Stationary, harmless filled rectangle.
    pub fn fill(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> Self {
        Self::new(x, y, width, height, Appearance::Fill(color), 0.0, false)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_lethal(&self) -> bool {
        self.lethal
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Hit box adjustment: positive shrinks (lethal), negative grows.
    pub fn fudge_factor(&self) -> f32 {
        if self.lethal {
            FUDGE
        } else {
            -FUDGE
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.speed == 0.0
    }

    /// Advance one tick, wrapping to just outside the opposite edge.
    pub fn update(&mut self, field: &Field) {
        if self.speed == 0.0 {
            return;
        }
        self.x += self.speed;
        if self.speed > 0.0 {
            if self.x > field.width {
                self.x = -self.width;
            }
        } else if self.x < -self.width {
            self.x = field.width;
        }
    }

    /// Horizontal overlap between this sprite's fudged box and `other`'s box.
    pub fn overlaps_horizontally(&self, other: &Sprite) -> bool {
        let fudge = self.fudge_factor();
        spans_intersect(
            self.left() + fudge,
            self.right() - fudge,
            other.left(),
            other.right(),
        )
    }

    /// Vertical overlap between this sprite's fudged box and `other`'s box.
    pub fn overlaps_vertically(&self, other: &Sprite) -> bool {
        let fudge = self.fudge_factor();
        spans_intersect(
            self.top() + fudge,
            self.bottom() - fudge,
            other.top(),
            other.bottom(),
        )
    }

    /// Collision test with `self` as the obstacle and `other` as the frog.
    ///
    /// Not symmetric: the subject's lethality picks the fudge factor.
    pub fn collides_with(&self, other: &Sprite) -> bool {
        self.overlaps_horizontally(other) && self.overlaps_vertically(other)
    }

    pub fn move_left(&mut self, _field: &Field) {
        if self.x <= 0.0 {
            return;
        }
        self.x = (self.x - self.width / 2.0).max(0.0);
    }

    pub fn move_right(&mut self, field: &Field) {
        if self.right() >= field.width {
            return;
        }
        self.x = (self.x + self.width / 2.0).min(field.width - self.width);
    }

    pub fn move_up(&mut self, _field: &Field) {
        if self.y <= 0.0 {
            return;
        }
        self.y = (self.y - self.height / 2.0).max(0.0);
    }

    pub fn move_down(&mut self, field: &Field) {
        if self.bottom() >= field.height {
            return;
        }
        self.y = (self.y + self.height / 2.0).min(field.height - self.height);
    }
}

/// Inclusive interval intersection, checked from both sides.
#[inline]
fn spans_intersect(l: f32, r: f32, other_l: f32, other_r: f32) -> bool {
    between(l, other_l, other_r)
        || between(r, other_l, other_r)
        || between(other_l, l, r)
        || between(other_r, l, r)
}

#[inline]
fn between(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo && v <= hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::palette;

    fn field() -> Field {
        Field::CLASSIC
    }

    fn obstacle(x: f32, speed: f32, lethal: bool) -> Sprite {
        Sprite::new(
            x,
            100.0,
            40.0,
            40.0,
            Appearance::Fill(palette::WHITE),
            speed,
            lethal,
        )
    }

    #[test]
    fn test_stationary_update_is_noop() {
        let mut s = obstacle(12.5, 0.0, true);
        s.update(&field());
        assert_eq!(s.x, 12.5);
        assert!(s.is_stopped());
    }

    #[test]
    fn test_update_moves_by_speed() {
        let mut s = obstacle(100.0, 1.5, true);
        s.update(&field());
        assert_eq!(s.x, 101.5);

        let mut s = obstacle(100.0, -0.5, true);
        s.update(&field());
        assert_eq!(s.x, 99.5);
    }

    #[test]
    fn test_wraps_right_to_left() {
        let mut s = obstacle(800.0, 1.0, true);
        s.update(&field());
        assert_eq!(s.x, -40.0);
    }

    #[test]
    fn test_wraps_left_to_right() {
        let mut s = obstacle(-40.0, -1.0, false);
        s.update(&field());
        assert_eq!(s.x, 800.0);
    }

    #[test]
    fn test_exactly_on_edge_does_not_wrap() {
        let mut s = obstacle(799.0, 1.0, true);
        s.update(&field());
        assert_eq!(s.x, 800.0);

        let mut s = obstacle(-39.0, -1.0, true);
        s.update(&field());
        assert_eq!(s.x, -40.0);
    }

    #[test]
    fn test_fudge_sign_follows_lethality() {
        assert_eq!(obstacle(0.0, 0.0, true).fudge_factor(), 7.0);
        assert_eq!(obstacle(0.0, 0.0, false).fudge_factor(), -7.0);
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let big = Sprite::fill(0.0, 0.0, 800.0, 40.0, palette::GOAL);
        let small = obstacle(300.0, 0.0, false);
        assert!(big.overlaps_horizontally(&small));
        assert!(small.overlaps_horizontally(&big));
    }

    #[test]
    fn test_collision_needs_both_axes() {
        let car = obstacle(100.0, 0.0, true);
        let mut frog = obstacle(100.0, 0.0, false);
        frog.y = 300.0;
        assert!(car.overlaps_horizontally(&frog));
        assert!(!car.overlaps_vertically(&frog));
        assert!(!car.collides_with(&frog));
    }

    #[test]
    fn test_moves_are_half_steps() {
        let f = field();
        let mut s = obstacle(100.0, 0.0, false);
        s.move_left(&f);
        assert_eq!(s.x, 80.0);
        s.move_right(&f);
        s.move_right(&f);
        assert_eq!(s.x, 120.0);
        s.move_up(&f);
        assert_eq!(s.y, 80.0);
        s.move_down(&f);
        assert_eq!(s.y, 100.0);
    }

    #[test]
    fn test_moves_clamp_to_field() {
        let f = field();
        let mut s = obstacle(10.0, 0.0, false);
        s.move_left(&f);
        assert_eq!(s.x, 0.0);

        s.x = 750.0;
        s.move_right(&f);
        assert_eq!(s.x, 760.0);
        assert_eq!(s.right(), f.width);

        s.y = 5.0;
        s.move_up(&f);
        assert_eq!(s.y, 0.0);

        s.y = 590.0;
        s.move_down(&f);
        assert_eq!(s.bottom(), f.height);
    }

    #[test]
    fn test_image_appearance_reports_tint() {
        let img = ImageRef::new("assets/log.png", 200.0, 40.0, Rgb::new(120, 80, 40));
        assert_eq!(Appearance::Image(img).color(), Rgb::new(120, 80, 40));
        assert_eq!(Appearance::Fill(palette::GOAL).color(), palette::GOAL);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Sprite::fill(0.0, 0.0, 0.0, 10.0, palette::WHITE);
    }

    #[test]
    #[should_panic]
    fn test_negative_height_panics() {
        let _ = Sprite::fill(0.0, 0.0, 10.0, -1.0, palette::WHITE);
    }
}
