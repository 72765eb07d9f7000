//! Enemy spawning
//!
//! At most one enemy per tick, just outside the visible area.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState};
use super::tier::{TierStats, spawn_chance};
use crate::consts::SPAWN_OFFSET;

/// Side of the viewport an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnSide {
    const ALL: [SpawnSide; 4] = [
        SpawnSide::Left,
        SpawnSide::Right,
        SpawnSide::Top,
        SpawnSide::Bottom,
    ];
}

/// Map position for a spawn on `side`, `t` in [0, 1) along that side.
///
/// The result is clamped into the map, which can pull an off-screen spawn
/// back onto the visible edge when the camera sits against a map boundary.
pub fn spawn_position(state: &GameState, side: SpawnSide, t: f32) -> Vec2 {
    let cam = state.camera;
    let vp = state.viewport;
    let pos = match side {
        SpawnSide::Left => Vec2::new(cam.x - SPAWN_OFFSET, cam.y + t * vp.height),
        SpawnSide::Right => Vec2::new(cam.x + vp.width + SPAWN_OFFSET, cam.y + t * vp.height),
        SpawnSide::Top => Vec2::new(cam.x + t * vp.width, cam.y - SPAWN_OFFSET),
        SpawnSide::Bottom => Vec2::new(cam.x + t * vp.width, cam.y + vp.height + SPAWN_OFFSET),
    };
    pos.clamp(Vec2::ZERO, state.map.size())
}

/// Roll for a spawn this tick and create the enemy if it hits
pub fn maybe_spawn(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let tier = state.tier();
    if state.rng.random::<f64>() >= spawn_chance(tier) {
        return;
    }

    let side = SpawnSide::ALL[state.rng.random_range(0..SpawnSide::ALL.len())];
    let t = state.rng.random::<f32>();
    let pos = spawn_position(state, side, t);

    let pool = TierStats::for_tier(tier).visuals;
    let visual = pool[state.rng.random_range(0..pool.len())];

    let id = state.spawn_enemy(pos, tier, visual);
    log::debug!(
        "Spawned tier {} enemy {} at ({:.0}, {:.0})",
        tier,
        id,
        pos.x,
        pos.y
    );
    events.push(GameEvent::EnemySpawned { id, tier });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Viewport;

    fn state() -> GameState {
        GameState::new(Viewport::from_window(800.0, 600.0), 11)
    }

    #[test]
    fn test_spawn_positions_outside_viewport() {
        let s = state(); // camera at (800, 600)
        assert_eq!(
            spawn_position(&s, SpawnSide::Left, 0.5),
            Vec2::new(750.0, 900.0)
        );
        assert_eq!(
            spawn_position(&s, SpawnSide::Right, 0.0),
            Vec2::new(1650.0, 600.0)
        );
        assert_eq!(
            spawn_position(&s, SpawnSide::Top, 0.25),
            Vec2::new(1000.0, 550.0)
        );
        assert_eq!(
            spawn_position(&s, SpawnSide::Bottom, 0.0),
            Vec2::new(800.0, 1250.0)
        );
    }

    #[test]
    fn test_spawn_clamped_at_map_edge() {
        let mut s = state();
        s.camera = Vec2::ZERO;
        assert_eq!(
            spawn_position(&s, SpawnSide::Left, 0.5),
            Vec2::new(0.0, 300.0)
        );
        assert_eq!(
            spawn_position(&s, SpawnSide::Top, 0.5),
            Vec2::new(400.0, 0.0)
        );
    }

    #[test]
    fn test_spawned_enemies_use_tier_stats() {
        let mut s = state();
        s.game_time = 3600; // tier 3
        let mut events = Vec::new();
        // ~1.2% per tick, plenty of rolls to get several spawns
        for _ in 0..5000 {
            maybe_spawn(&mut s, &mut events);
        }
        assert!(!s.enemies.is_empty());
        assert_eq!(events.len(), s.enemies.len());
        for e in &s.enemies {
            assert_eq!(e.tier, 3);
            assert_eq!(e.health, 3);
            assert_eq!(e.max_health, 3);
            assert_eq!(e.damage, 12);
            assert_eq!(e.visual, "🍊");
            assert!(s.map.contains(e.pos));
        }
    }

    #[test]
    fn test_spawning_is_seeded() {
        let mut a = state();
        let mut b = state();
        let (mut ea, mut eb) = (Vec::new(), Vec::new());
        for _ in 0..2000 {
            maybe_spawn(&mut a, &mut ea);
            maybe_spawn(&mut b, &mut eb);
        }
        assert_eq!(a.enemies, b.enemies);
    }
}
