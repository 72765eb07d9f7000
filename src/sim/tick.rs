//! Fixed-step simulation tick
//!
//! Core game loop step. Sub-steps run in a fixed order:
//! movement, fire, projectile move, hits and score, spawn, contact damage,
//! enemy chase. Enemies killed this tick are removed before contact damage,
//! so they never hurt the player on the tick they die.

use super::combat::{
    advance_projectiles, apply_contact_damage, chase_player, resolve_hits, try_fire,
};
use super::input::InputState;
use super::movement::update_player;
use super::spawner::maybe_spawn;
use super::state::{GameEvent, GameState};

/// Everything a tick reads from the outside world
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held keys, sampled at the tick boundary
    pub keys: InputState,
    /// Monotonic wall time in ms, used for cooldowns
    pub now_ms: f64,
}

/// Advance the game state by one fixed step.
///
/// Returns the events produced by this step. Once the run is over this is a
/// no-op until the state is reset.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_game_over() {
        return events;
    }

    let now = input.now_ms;
    let tier_before = state.tier();
    state.game_time += 1;
    state.now_ms = now;

    update_player(state, &input.keys);

    try_fire(state, now, &mut events);
    advance_projectiles(state);
    resolve_hits(state, &mut events);

    let tier = state.tier();
    if tier != tier_before {
        log::info!("Tier {} unlocked at tick {}", tier, state.game_time);
    }
    maybe_spawn(state, &mut events);

    apply_contact_damage(state, now, &mut events);
    chase_player(state);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::geometry::Viewport;
    use crate::sim::state::Direction;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(Viewport::from_window(800.0, 600.0), 12345)
    }

    fn input_at(now_ms: f64) -> TickInput {
        TickInput {
            now_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_advances_time() {
        let mut s = state();
        tick(&mut s, &input_at(0.0));
        tick(&mut s, &input_at(16.0));
        assert_eq!(s.game_time, 2);
        assert_eq!(s.now_ms, 16.0);
    }

    #[test]
    fn test_collision_scenario() {
        let mut s = state();
        s.player.pos = Vec2::new(100.0, 100.0);
        s.spawn_enemy(Vec2::new(110.0, 100.0), 1, "🍓");
        s.spawn_projectile(Vec2::new(105.0, 100.0), Direction::Right, 1);
        // Keep the auto-fire from adding a projectile of its own
        s.last_fire_ms = Some(0.0);
        s.last_damage_ms = Some(0.0);

        let events = tick(&mut s, &input_at(100.0));
        assert!(s.enemies.iter().all(|e| e.id != 1));
        let killed = GameEvent::EnemyKilled { id: 1, score: 10 };
        assert!(events.contains(&killed));
        assert_eq!(s.score, 10);
        assert!(s.projectiles.is_empty());
    }

    #[test]
    fn test_dead_enemy_deals_no_contact_damage() {
        let mut s = state();
        s.player.pos = Vec2::new(100.0, 100.0);
        s.spawn_enemy(Vec2::new(110.0, 100.0), 1, "🍓");
        s.spawn_projectile(Vec2::new(105.0, 100.0), Direction::Right, 1);
        s.last_fire_ms = Some(0.0);

        tick(&mut s, &input_at(100.0));
        assert_eq!(s.player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_fire_cooldown_across_ticks() {
        let mut s = state();
        s.spawn_enemy(Vec2::new(1800.0, 900.0), 1, "🍓");
        tick(&mut s, &input_at(1000.0));
        tick(&mut s, &input_at(1100.0));
        let fired = s.projectiles.len();
        assert_eq!(fired, 1);
        tick(&mut s, &input_at(1700.0));
        assert_eq!(s.projectiles.len(), 2);
    }

    #[test]
    fn test_contact_damage_over_three_ticks() {
        let mut s = state();
        let p = s.player.pos;
        s.spawn_enemy(p + Vec2::new(20.0, 0.0), 1, "🍓");
        s.enemies[0].damage = 10;
        s.enemies[0].speed = 0.0;
        s.enemies[0].health = 1000;
        s.enemies[0].max_health = 1000;

        for now in [5000.0, 5016.0, 5032.0] {
            tick(&mut s, &input_at(now));
        }
        assert_eq!(s.player.health, PLAYER_MAX_HEALTH - 10);
        assert!(s.is_flashing());
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut s = state();
        let p = s.player.pos;
        s.player.health = 3;
        s.score = 40;
        s.spawn_enemy(p + Vec2::new(0.0, 30.0), 4, "🍌");
        s.enemies[0].health = 1000;
        s.last_fire_ms = Some(0.0);

        let events = tick(&mut s, &input_at(100.0));
        let info = s.game_over.expect("player should be dead");
        assert_eq!(info.final_score, 40);
        assert_eq!(info.final_time, 1);
        assert!(events.contains(&GameEvent::GameOver(info)));

        let frozen = s.clone();
        let events = tick(&mut s, &input_at(5000.0));
        assert!(events.is_empty());
        assert_eq!(s, frozen);
    }

    #[test]
    fn test_determinism() {
        let mut s1 = state();
        let mut s2 = state();
        let keys = InputState::with_keys(&["d", "s"]);
        for i in 0..600 {
            let input = TickInput {
                keys: keys.clone(),
                now_ms: i as f64 * 16.7,
            };
            tick(&mut s1, &input);
            tick(&mut s2, &input);
        }
        assert_eq!(s1, s2);
    }
}
