//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; the tick is the only writer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::geometry::{MapBounds, Viewport, camera_for};
use super::tier::{TierStats, tier_for_ticks};
use crate::consts::*;

/// Cardinal direction (facing, fire direction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in map coordinates (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    /// Coarse direction toward a target: horizontal only when |dx| > |dy|
    pub fn toward(from: Vec2, to: Vec2) -> Self {
        let d = to - from;
        if d.x.abs() > d.y.abs() {
            if d.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if d.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Damage dealt per projectile
    pub damage: i32,
    pub direction: Direction,
    pub moving: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            damage: PLAYER_DAMAGE,
            direction: Direction::Down,
            moving: false,
        }
    }
}

/// A chasing enemy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub tier: u8,
    pub speed: f32,
    pub damage: i32,
    pub visual: &'static str,
}

impl Enemy {
    /// Fresh enemy with full stats from the tier table
    pub fn from_tier(id: u32, pos: Vec2, tier: u8, visual: &'static str) -> Self {
        let stats = TierStats::for_tier(tier);
        Self {
            id,
            pos,
            health: stats.health,
            max_health: stats.health,
            tier,
            speed: stats.speed,
            damage: stats.damage,
            visual,
        }
    }
}

/// An auto-fired projectile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub direction: Direction,
    pub speed: f32,
    pub damage: i32,
}

/// Final stats captured when the run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverInfo {
    pub final_score: u64,
    /// Survival time in ticks
    pub final_time: u64,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemySpawned { id: u32, tier: u8 },
    ProjectileFired { id: u32, direction: Direction },
    EnemyHit { id: u32, remaining: i32 },
    EnemyKilled { id: u32, score: u64 },
    PlayerDamaged { amount: i32, health: i32 },
    GameOver(GameOverInfo),
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed; reset reseeds the RNG from it
    pub seed: u64,
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub map: MapBounds,
    pub player: Player,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Projectiles in fire order
    pub projectiles: Vec<Projectile>,
    pub camera: Vec2,
    /// Ticks survived
    pub game_time: u64,
    pub score: u64,
    pub game_over: Option<GameOverInfo>,
    /// Wall time (ms) of the last shot, None before the first
    pub last_fire_ms: Option<f64>,
    /// Wall time (ms) of the last contact damage, None before the first
    pub last_damage_ms: Option<f64>,
    /// Hurt flash is on while `now < flash_until_ms`
    pub flash_until_ms: Option<f64>,
    /// Wall time of the most recent tick
    pub now_ms: f64,
    next_enemy_id: u32,
    next_projectile_id: u32,
}

impl GameState {
    /// Create a new run for the given viewport
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let map = viewport.map();
        let player = Player::new(map.center());
        let camera = camera_for(player.pos, &viewport, &map);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            map,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            camera,
            game_time: 0,
            score: 0,
            game_over: None,
            last_fire_ms: None,
            last_damage_ms: None,
            flash_until_ms: None,
            now_ms: 0.0,
            next_enemy_id: 1,
            next_projectile_id: 1,
        }
    }

    /// Reinitialize every run field, keeping the current viewport and seed
    pub fn reset(&mut self) {
        *self = Self::new(self.viewport, self.seed);
    }

    /// Apply new geometry without resetting the run
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.map = viewport.map();
        self.player.pos = self.map.clamp_inset(self.player.pos, PLAYER_HALF_EXTENT);
        self.camera = camera_for(self.player.pos, &self.viewport, &self.map);
    }

    pub fn next_enemy_id(&mut self) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        id
    }

    pub fn next_projectile_id(&mut self) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn tier(&self) -> u8 {
        tier_for_ticks(self.game_time)
    }

    /// Hurt flash signal as of the latest tick
    pub fn is_flashing(&self) -> bool {
        self.flash_until_ms.is_some_and(|until| self.now_ms < until)
    }

    /// Push an enemy with a fresh id (spawner and tests)
    pub fn spawn_enemy(&mut self, pos: Vec2, tier: u8, visual: &'static str) -> u32 {
        let id = self.next_enemy_id();
        self.enemies.push(Enemy::from_tier(id, pos, tier, visual));
        id
    }

    /// Push a projectile with a fresh id
    pub fn spawn_projectile(&mut self, pos: Vec2, direction: Direction, damage: i32) -> u32 {
        let id = self.next_projectile_id();
        self.projectiles.push(Projectile {
            id,
            pos,
            direction,
            speed: PROJECTILE_SPEED,
            damage,
        });
        id
    }
}
