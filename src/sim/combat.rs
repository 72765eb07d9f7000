//! Combat: auto-fire, projectile flight, hits, contact damage and chasing
//!
//! Each function is one sub-step of the tick and runs against the live
//! collections in [`GameState`]. Hits are gathered first and applied after,
//! so a projectile hits at most one enemy and an enemy takes at most one
//! hit per tick.

use glam::Vec2;

use super::state::{Direction, Enemy, GameEvent, GameOverInfo, GameState};
use crate::consts::*;

/// Index of the enemy nearest to `from`. Ties keep the earliest enemy.
pub fn nearest_enemy(from: Vec2, enemies: &[Enemy]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, enemy) in enemies.iter().enumerate() {
        let dist = from.distance(enemy.pos);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Fire one projectile at the nearest enemy if the cooldown has expired.
///
/// With no enemies nothing fires and the cooldown is left untouched.
pub fn try_fire(state: &mut GameState, now_ms: f64, events: &mut Vec<GameEvent>) {
    let ready = state
        .last_fire_ms
        .is_none_or(|last| now_ms - last > FIRE_COOLDOWN_MS);
    if !ready {
        return;
    }
    let Some(target) = nearest_enemy(state.player.pos, &state.enemies) else {
        return;
    };

    let origin = state.player.pos;
    let direction = Direction::toward(origin, state.enemies[target].pos);
    let damage = state.player.damage;
    let id = state.spawn_projectile(origin, direction, damage);
    state.last_fire_ms = Some(now_ms);
    events.push(GameEvent::ProjectileFired { id, direction });
}

/// Advance projectiles along their direction and drop those that left the map
pub fn advance_projectiles(state: &mut GameState) {
    let map = state.map;
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.direction.unit() * projectile.speed;
    }
    state.projectiles.retain(|p| map.contains(p.pos));
}

/// Resolve projectile/enemy hits, remove consumed projectiles and dead enemies,
/// and award score. Returns the score gained.
pub fn resolve_hits(state: &mut GameState, events: &mut Vec<GameEvent>) -> u64 {
    let mut projectile_hit = vec![false; state.projectiles.len()];
    let mut enemy_damage: Vec<Option<i32>> = vec![None; state.enemies.len()];

    // Gather
    for (p_idx, projectile) in state.projectiles.iter().enumerate() {
        for (e_idx, enemy) in state.enemies.iter().enumerate() {
            if enemy_damage[e_idx].is_some() {
                continue;
            }
            if projectile.pos.distance(enemy.pos) < HIT_RADIUS {
                projectile_hit[p_idx] = true;
                enemy_damage[e_idx] = Some(projectile.damage);
                break;
            }
        }
    }

    // Apply
    let mut gained = 0;
    for (enemy, damage) in state.enemies.iter_mut().zip(&enemy_damage) {
        let Some(damage) = damage else { continue };
        enemy.health -= damage;
        if enemy.health <= 0 {
            let score = enemy.tier as u64 * SCORE_PER_TIER;
            gained += score;
            log::debug!("Enemy {} (tier {}) destroyed", enemy.id, enemy.tier);
            events.push(GameEvent::EnemyKilled {
                id: enemy.id,
                score,
            });
        } else {
            events.push(GameEvent::EnemyHit {
                id: enemy.id,
                remaining: enemy.health,
            });
        }
    }

    let mut hits = projectile_hit.into_iter();
    state.projectiles.retain(|_| !hits.next().unwrap_or(false));
    state.enemies.retain(|e| e.health > 0);

    state.score += gained;
    gained
}

/// Apply lumped contact damage from every enemy touching the player.
///
/// Gated by the contact cooldown; all touching enemies contribute to a single
/// hit. Latches game over the first time health reaches zero.
pub fn apply_contact_damage(state: &mut GameState, now_ms: f64, events: &mut Vec<GameEvent>) {
    let ready = state
        .last_damage_ms
        .is_none_or(|last| now_ms - last > CONTACT_COOLDOWN_MS);
    if !ready {
        return;
    }

    let player_pos = state.player.pos;
    let total: i32 = state
        .enemies
        .iter()
        .filter(|e| player_pos.distance(e.pos) < CONTACT_RADIUS)
        .map(|e| e.damage)
        .sum();
    if total == 0 {
        return;
    }

    state.player.health = (state.player.health - total).max(0);
    state.last_damage_ms = Some(now_ms);
    state.flash_until_ms = Some(now_ms + FLASH_DURATION_MS);
    events.push(GameEvent::PlayerDamaged {
        amount: total,
        health: state.player.health,
    });

    if state.player.health == 0 && state.game_over.is_none() {
        let info = GameOverInfo {
            final_score: state.score,
            final_time: state.game_time,
        };
        state.game_over = Some(info);
        log::info!(
            "Game over: score {} after {} ticks",
            info.final_score,
            info.final_time
        );
        events.push(GameEvent::GameOver(info));
    }
}

/// Step every enemy toward the player by its own speed
pub fn chase_player(state: &mut GameState) {
    let target = state.player.pos;
    for enemy in &mut state.enemies {
        let delta = target - enemy.pos;
        let dist = delta.length();
        if dist > 0.0 {
            enemy.pos += delta / dist * enemy.speed;
        }
    }
}
