//! Game state module - manages the complete game state
//!
//! This module ties together the frog, the obstacle lanes and the goal row.
//! It runs the per-tick transition, routes player input, and handles pause
//! and reset.

use crate::group::SpriteGroup;
use crate::layout::LevelLayout;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, Layer, SpriteRole, SpriteView};
use crate::sprite::Sprite;
use crate::types::{Field, GameAction, LossCause, Outcome};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    layout: LevelLayout,
    seed: u32,
    frog: Sprite,
    /// Obstacle lanes in scan order.
    lanes: Vec<SpriteGroup>,
    goal: Sprite,
    backdrop: Vec<Sprite>,
    outcome: Outcome,
    paused: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Ticks simulated in the current episode.
    tick: u64,
}

impl GameState {
    /// Create the classic level with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_layout(LevelLayout::classic(), seed)
    }

    pub fn with_layout(layout: LevelLayout, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self {
            frog: layout.build_frog(),
            lanes: layout.build_lanes(&mut rng),
            goal: layout.build_goal(),
            backdrop: layout.build_backdrop(),
            layout,
            seed,
            outcome: Outcome::Playing,
            paused: false,
            episode_id: 0,
            tick: 0,
        }
    }

    pub fn field(&self) -> &Field {
        &self.layout.field
    }

    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn frog(&self) -> &Sprite {
        &self.frog
    }

    pub fn lanes(&self) -> &[SpriteGroup] {
        &self.lanes
    }

    pub fn goal(&self) -> &Sprite {
        &self.goal
    }

    pub fn backdrop(&self) -> &[Sprite] {
        &self.backdrop
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Banner text for the current outcome.
    pub fn text(&self) -> &'static str {
        self.outcome.banner()
    }

    /// Move the frog somewhere else, e.g. to set up a scenario.
    pub fn place_frog(&mut self, x: f32, y: f32) {
        self.frog.x = x;
        self.frog.y = y;
    }

    /// Advance one frame.
    ///
    /// Returns the outcome this tick ended the round with, if any. A paused
    /// game does not advance and returns `None`.
    pub fn tick(&mut self) -> Option<Outcome> {
        if self.paused {
            return None;
        }

        self.tick = self.tick.wrapping_add(1);
        self.frog.speed = 0.0;

        let field = self.layout.field;
        let mut splatted = false;
        for lane in &mut self.lanes {
            lane.update(&field);
            if !lane.collides_with_player(&self.frog) {
                continue;
            }
            if lane.is_lethal() {
                splatted = true;
                break;
            }
            self.frog.speed = lane.speed();
        }

        // Later checks override a splat: the top row wins, then still water
        // drowns.
        let mut ended = splatted.then_some(Outcome::Lost(LossCause::Splat));
        if self.frog.y == 0.0 {
            ended = Some(Outcome::Won);
        } else if self.frog.is_stopped() && self.layout.in_water(self.frog.y) {
            ended = Some(Outcome::Lost(LossCause::Splash));
        }

        if let Some(outcome) = ended {
            self.outcome = outcome;
            self.paused = true;
        }

        self.frog.update(&field);
        ended
    }

    /// Rebuild the level from its layout and start a new episode.
    pub fn reset(&mut self) {
        let mut rng = SimpleRng::new(self.seed);
        self.frog = self.layout.build_frog();
        self.lanes = self.layout.build_lanes(&mut rng);
        self.goal = self.layout.build_goal();
        self.backdrop = self.layout.build_backdrop();
        self.outcome = Outcome::Playing;
        self.paused = false;
        self.tick = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Flip the pause flag. Entities and the outcome are left alone, so
    /// unpausing a finished round resumes play under its banner.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.nudge(Sprite::move_left)
    }

    pub fn move_right(&mut self) -> bool {
        self.nudge(Sprite::move_right)
    }

    pub fn move_up(&mut self) -> bool {
        self.nudge(Sprite::move_up)
    }

    pub fn move_down(&mut self) -> bool {
        self.nudge(Sprite::move_down)
    }

    fn nudge(&mut self, step: fn(&mut Sprite, &Field)) -> bool {
        if self.paused {
            return false;
        }
        let before = (self.frog.x, self.frog.y);
        step(&mut self.frog, &self.layout.field);
        before != (self.frog.x, self.frog.y)
    }

    /// Apply a game action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveUp => self.move_up(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Fill `out` with the current frame, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field = self.layout.field;
        out.outcome = self.outcome;
        out.paused = self.paused;
        out.episode_id = self.episode_id;
        out.tick = self.tick;
        out.seed = self.seed;

        out.sprites.clear();
        out.sprites.extend(
            self.backdrop
                .iter()
                .map(|s| SpriteView::from_sprite(s, Layer::Backdrop, SpriteRole::Backdrop)),
        );
        for lane in &self.lanes {
            let role = SpriteRole::Obstacle(lane.kind());
            out.sprites.extend(
                lane.sprites()
                    .iter()
                    .map(|s| SpriteView::from_sprite(s, Layer::Obstacle, role)),
            );
        }
        out.sprites
            .push(SpriteView::from_sprite(&self.goal, Layer::Goal, SpriteRole::Goal));
        out.sprites
            .push(SpriteView::from_sprite(&self.frog, Layer::Frog, SpriteRole::Frog));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LaneSpec;
    use crate::types::{ObstacleKind, FROG_SIZE};

    /// Classic field with no lanes at all, so only the frog and the bands matter.
    fn empty_level() -> GameState {
        let mut layout = LevelLayout::classic();
        layout.lanes.clear();
        GameState::with_layout(layout, 1)
    }

    fn single_lane(lane: u8, kind: ObstacleKind, speed: f32) -> GameState {
        let mut layout = LevelLayout::classic();
        let image = match kind {
            ObstacleKind::Car => crate::layout::ORANGE_CAR,
            ObstacleKind::Truck => crate::layout::TRUCK_LEFT,
            ObstacleKind::Log => crate::layout::LOG,
            ObstacleKind::Turtle => crate::layout::TURTLE,
        };
        layout.lanes = vec![LaneSpec {
            lane,
            kind,
            count: 1,
            speed,
            image,
            spacing: None,
        }];
        GameState::with_layout(layout, 1)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.outcome(), Outcome::Playing);
        assert!(!state.paused());
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.tick_count(), 0);
        assert_eq!((state.frog().x, state.frog().y), (380.0, 600.0));
        assert_eq!(state.lanes().len(), 8);
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_tick_counts_only_when_running() {
        let mut state = empty_level();
        state.tick();
        state.tick();
        assert_eq!(state.tick_count(), 2);
        state.toggle_pause();
        assert_eq!(state.tick(), None);
        assert_eq!(state.tick_count(), 2);
    }

    #[test]
    fn test_reaching_top_row_wins() {
        let mut state = empty_level();
        state.place_frog(380.0, 0.0);
        assert_eq!(state.tick(), Some(Outcome::Won));
        assert!(state.paused());
        assert_eq!(state.text(), "YOU WIN");
    }

    #[test]
    fn test_standing_in_water_splashes() {
        let mut state = empty_level();
        state.place_frog(380.0, 100.0);
        assert_eq!(state.tick(), Some(Outcome::Lost(LossCause::Splash)));
        assert_eq!(state.text(), "SPLASH");
    }

    #[test]
    fn test_water_band_edges_are_safe() {
        let mut state = empty_level();
        state.place_frog(380.0, FROG_SIZE);
        assert_eq!(state.tick(), None);
        state.place_frog(380.0, 260.0);
        assert_eq!(state.tick(), None);
        assert_eq!(state.outcome(), Outcome::Playing);
    }

    #[test]
    fn test_lethal_lane_splats() {
        let mut state = single_lane(7, ObstacleKind::Car, 0.0);
        let car = state.lanes()[0].sprites()[0];
        state.place_frog(car.x, car.y);
        assert_eq!(state.tick(), Some(Outcome::Lost(LossCause::Splat)));
        assert!(state.paused());
    }

    #[test]
    fn test_riding_a_log_carries_the_frog() {
        let mut state = single_lane(2, ObstacleKind::Log, 0.5);
        let log = state.lanes()[0].sprites()[0];
        assert!(log.x + 0.5 <= 800.0, "log must not wrap this tick");
        // The log moves first, then the frog rides along by the same amount.
        state.place_frog(log.x + 50.0, log.y);
        assert_eq!(state.tick(), None);
        assert_eq!(state.frog().x, log.x + 50.5);
        assert_eq!(state.frog().speed, 0.5);
        assert_eq!(state.outcome(), Outcome::Playing);
    }

    #[test]
    fn test_moves_ignored_while_paused() {
        let mut state = empty_level();
        assert!(state.toggle_pause());
        assert!(!state.move_up());
        assert_eq!(state.frog().y, 600.0);
        assert!(state.toggle_pause());
        assert!(state.move_up());
        assert_eq!(state.frog().y, 580.0);
    }

    #[test]
    fn test_toggle_pause_resumes_finished_round() {
        let mut state = empty_level();
        state.place_frog(380.0, 120.0);
        state.tick();
        assert!(state.paused());

        assert!(state.toggle_pause());
        assert!(!state.paused());
        assert_eq!(state.outcome(), Outcome::Lost(LossCause::Splash));
        assert_eq!(state.text(), "SPLASH");
        assert_eq!((state.frog().x, state.frog().y), (380.0, 120.0));

        // Still standing in the water: the next tick ends the round again.
        assert!(state.move_left());
        assert_eq!(state.tick(), Some(Outcome::Lost(LossCause::Splash)));
        assert!(state.paused());
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut state = GameState::new(7);
        let fresh_lanes = state.lanes().to_vec();
        for _ in 0..30 {
            state.tick();
        }
        state.place_frog(380.0, 0.0);
        state.tick();
        assert!(state.outcome().is_terminal());

        state.reset();
        assert_eq!(state.outcome(), Outcome::Playing);
        assert!(!state.paused());
        assert_eq!((state.frog().x, state.frog().y), (380.0, 600.0));
        assert_eq!(state.lanes(), fresh_lanes.as_slice());
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.tick_count(), 0);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = empty_level();
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.frog().x, 360.0);
        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.paused());
        assert!(state.apply_action(GameAction::Reset));
        assert!(!state.paused());
        assert_eq!(state.frog().x, 380.0);
    }

    #[test]
    fn test_snapshot_draw_order() {
        let state = GameState::new(3);
        let snap = state.snapshot();
        let total_obstacles: usize = state.lanes().iter().map(|l| l.len()).sum();
        assert_eq!(snap.sprites.len(), 3 + total_obstacles + 2);
        assert_eq!(snap.sprites[0].layer, Layer::Backdrop);
        assert_eq!(snap.sprites[snap.sprites.len() - 2].role, SpriteRole::Goal);
        assert_eq!(snap.frog().map(|f| (f.x, f.y)), Some((380.0, 600.0)));
        assert!(snap.sprites.windows(2).all(|w| w[0].layer <= w[1].layer));
        assert!(snap.playable());
    }
}
