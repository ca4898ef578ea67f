//! Level layout - the data a level is (re)built from
//!
//! [`LevelLayout::classic`] reproduces the arcade board: four road lanes of
//! cars and trucks, a median strip, then four river lanes of logs and turtles
//! below the goal row.
//!
//! ```text
//!  y    lane
//!    0  goal row
//!   60  1  turtles  →
//!  120  2  logs     →
//!  180  3  turtles  ←
//!  240  4  logs     ←
//!  300  5  median
//!  360  6  trucks   ←
//!  420  7  cars     ←
//!  480  8  truck    →
//!  540  9  cars     →
//!  600 10  median / frog spawn
//! ```

use crate::group::{GroupSpec, SpriteGroup};
use crate::rng::SimpleRng;
use crate::sprite::{Appearance, ImageRef, Sprite};
use crate::types::{palette, Field, ObstacleKind, Rgb, FROG_SIZE, LANE_GAP, LANE_HEIGHT};

pub const FROG_IMAGE: ImageRef =
    ImageRef::new("assets/80sFrogger.png", FROG_SIZE, FROG_SIZE, palette::FROG);
pub const ORANGE_CAR: ImageRef =
    ImageRef::new("assets/orange_car.png", 60.0, 40.0, Rgb::new(255, 140, 0));
pub const YELLOW_CAR: ImageRef =
    ImageRef::new("assets/yellow_car.png", 60.0, 40.0, Rgb::new(240, 220, 60));
pub const TRUCK_RIGHT: ImageRef =
    ImageRef::new("assets/blue_truck_r.png", 120.0, 40.0, Rgb::new(70, 110, 230));
pub const TRUCK_LEFT: ImageRef =
    ImageRef::new("assets/blue_truck.png", 120.0, 40.0, Rgb::new(70, 110, 230));
pub const LOG: ImageRef = ImageRef::new("assets/log.png", 200.0, 40.0, Rgb::new(140, 90, 40));
pub const TURTLE: ImageRef = ImageRef::new("assets/turtle.png", 50.0, 40.0, Rgb::new(30, 160, 80));

/// One obstacle lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneSpec {
    /// Row index; the lane's y is `lane * lane_height`.
    pub lane: u8,
    pub kind: ObstacleKind,
    pub count: usize,
    pub speed: f32,
    pub image: ImageRef,
    pub spacing: Option<f32>,
}

/// Cosmetic rectangle drawn under everything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

/// Everything needed to build (and rebuild) a level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub field: Field,
    pub lane_height: f32,
    pub frog: ImageRef,
    /// Lanes in scan order. The first lethal hit in this order ends a tick.
    pub lanes: Vec<LaneSpec>,
    pub backdrop: Vec<BackdropSpec>,
    pub goal_color: Rgb,
    pub goal_height: f32,
    /// Open interval of frog y values where standing still drowns.
    pub water_band: (f32, f32),
}

impl LevelLayout {
    /// The arcade board on an 800x640 field.
    pub fn classic() -> Self {
        let field = Field::CLASSIC;
        let lane = |lane, kind, count, speed, image, spacing| LaneSpec {
            lane,
            kind,
            count,
            speed,
            image,
            spacing,
        };

        Self {
            field,
            lane_height: LANE_HEIGHT,
            frog: FROG_IMAGE,
            lanes: vec![
                lane(9, ObstacleKind::Car, 3, 1.5, ORANGE_CAR, None),
                lane(8, ObstacleKind::Truck, 1, 0.5, TRUCK_RIGHT, None),
                lane(7, ObstacleKind::Car, 4, -1.5, YELLOW_CAR, None),
                lane(6, ObstacleKind::Truck, 2, -0.5, TRUCK_LEFT, None),
                lane(4, ObstacleKind::Log, 2, -0.5, LOG, Some(100.0)),
                lane(3, ObstacleKind::Turtle, 5, -1.0, TURTLE, None),
                lane(2, ObstacleKind::Log, 2, 0.5, LOG, Some(100.0)),
                lane(1, ObstacleKind::Turtle, 5, 1.0, TURTLE, None),
            ],
            backdrop: vec![
                BackdropSpec {
                    x: 0.0,
                    y: 0.0,
                    width: field.width,
                    height: field.height / 2.0,
                    color: palette::WATER,
                },
                BackdropSpec {
                    x: 0.0,
                    y: 10.0 * LANE_HEIGHT,
                    width: field.width,
                    height: FROG_SIZE,
                    color: palette::MEDIAN,
                },
                BackdropSpec {
                    x: 0.0,
                    y: 5.0 * LANE_HEIGHT,
                    width: field.width,
                    height: FROG_SIZE,
                    color: palette::MEDIAN,
                },
            ],
            goal_color: palette::GOAL,
            goal_height: FROG_SIZE,
            water_band: (FROG_SIZE, 4.0 * LANE_HEIGHT + LANE_GAP),
        }
    }

    /// Where the frog starts: bottom row, horizontally centred.
    pub fn spawn_point(&self) -> (f32, f32) {
        (
            self.field.width / 2.0 - self.frog.width / 2.0,
            self.field.height - self.frog.height,
        )
    }

    pub fn build_frog(&self) -> Sprite {
        let (x, y) = self.spawn_point();
        Sprite::new(
            x,
            y,
            self.frog.width,
            self.frog.height,
            Appearance::Image(self.frog),
            0.0,
            false,
        )
    }

    pub fn build_goal(&self) -> Sprite {
        Sprite::fill(0.0, 0.0, self.field.width, self.goal_height, self.goal_color)
    }

    pub fn build_backdrop(&self) -> Vec<Sprite> {
        self.backdrop
            .iter()
            .map(|b| Sprite::fill(b.x, b.y, b.width, b.height, b.color))
            .collect()
    }

    /// Build every lane. Each lane draws its start x from `rng`, in lane order.
    pub fn build_lanes(&self, rng: &mut SimpleRng) -> Vec<SpriteGroup> {
        self.lanes
            .iter()
            .map(|lane| {
                let spec = GroupSpec {
                    x: rng.next_coord(self.field.width),
                    y: lane.lane as f32 * self.lane_height,
                    width: lane.image.width,
                    height: lane.image.height,
                    appearance: Appearance::Image(lane.image),
                    speed: lane.speed,
                    count: lane.count,
                    lethal: lane.kind.is_lethal(),
                    spacing: lane.spacing,
                    kind: lane.kind,
                };
                SpriteGroup::new(&self.field, &spec)
            })
            .collect()
    }

    /// Strictly inside the water band.
    pub fn in_water(&self, y: f32) -> bool {
        let (lo, hi) = self.water_band;
        y > lo && y < hi
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::classic()
    }
}
