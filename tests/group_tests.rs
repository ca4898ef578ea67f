//! Sprite group construction and lane behaviour.

use tui_frogger::core::{Appearance, GroupSpec, Sprite, SpriteGroup};
use tui_frogger::types::{palette, Field, ObstacleKind};

fn spec(x: f32, count: usize, spacing: Option<f32>, speed: f32, lethal: bool) -> GroupSpec {
    GroupSpec {
        x,
        y: 300.0,
        width: 40.0,
        height: 40.0,
        appearance: Appearance::Fill(palette::WHITE),
        speed,
        count,
        lethal,
        spacing,
        kind: if lethal {
            ObstacleKind::Car
        } else {
            ObstacleKind::Log
        },
    }
}

fn xs(group: &SpriteGroup) -> Vec<f32> {
    group.sprites().iter().map(|s| s.x).collect()
}

#[test]
fn test_members_laid_out_with_spacing() {
    let g = SpriteGroup::new(&Field::CLASSIC, &spec(10.0, 3, Some(20.0), 1.0, true));
    assert_eq!(xs(&g), vec![10.0, 70.0, 130.0]);
}

#[test]
fn test_layout_wraps_and_keeps_going() {
    // 770 + 40 > 800, so the next member starts at 20 - 30 = -10.
    let g = SpriteGroup::new(&Field::CLASSIC, &spec(770.0, 3, Some(20.0), 1.0, true));
    assert_eq!(xs(&g), vec![770.0, -10.0, 50.0]);
}

#[test]
fn test_group_shares_speed_and_lethality() {
    let g = SpriteGroup::new(&Field::CLASSIC, &spec(0.0, 5, None, -0.5, false));
    assert_eq!(g.speed(), -0.5);
    assert!(!g.is_lethal());
    assert_eq!(g.kind(), ObstacleKind::Log);
    assert!(g.sprites().iter().all(|s| s.speed == -0.5 && !s.is_lethal()));
}

#[test]
fn test_update_keeps_relative_spacing() {
    let field = Field::CLASSIC;
    let mut g = SpriteGroup::new(&field, &spec(100.0, 3, Some(20.0), 1.5, true));
    for _ in 0..10 {
        g.update(&field);
    }
    assert_eq!(xs(&g), vec![115.0, 175.0, 235.0]);
}

#[test]
fn test_collides_with_player_uses_member_fudge() {
    let g = SpriteGroup::new(&Field::CLASSIC, &spec(100.0, 1, None, 0.0, true));
    let touching = Sprite::fill(133.0, 300.0, 40.0, 40.0, palette::FROG);
    let clear = Sprite::fill(134.0, 300.0, 40.0, 40.0, palette::FROG);
    assert!(g.collides_with_player(&touching));
    assert!(!g.collides_with_player(&clear));
}
