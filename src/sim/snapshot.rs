//! Frame-consistent view of a completed tick for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::state::{Direction, GameOverInfo, GameState};
use crate::consts::TICKS_PER_SECOND;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub moving: bool,
    pub direction: Direction,
    pub flashing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub visual: &'static str,
    pub health: i32,
    pub max_health: i32,
    pub tier: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStats {
    pub game_time: u64,
    pub score: u64,
    pub enemy_count: usize,
    pub tier: u8,
}

/// Everything the renderer needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub camera: Vec2,
    pub stats: RunStats,
    pub game_over: Option<GameOverInfo>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: PlayerView {
                pos: state.player.pos,
                health: state.player.health,
                max_health: state.player.max_health,
                moving: state.player.moving,
                direction: state.player.direction,
                flashing: state.is_flashing(),
            },
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    visual: e.visual,
                    health: e.health,
                    max_health: e.max_health,
                    tier: e.tier,
                })
                .collect(),
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pos: p.pos,
                    direction: p.direction,
                })
                .collect(),
            camera: state.camera,
            stats: RunStats {
                game_time: state.game_time,
                score: state.score,
                enemy_count: state.enemies.len(),
                tier: state.tier(),
            },
            game_over: state.game_over,
        }
    }

    /// Whole seconds survived, as shown on the HUD
    pub fn time_survived_secs(&self) -> u64 {
        self.stats.game_time / TICKS_PER_SECOND
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
