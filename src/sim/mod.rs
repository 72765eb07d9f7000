//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per call, time passed in by the caller
//! - Seeded RNG only
//! - Stable iteration order (insertion order, ids are monotonic)
//! - No rendering or platform dependencies

pub mod combat;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod tier;

pub use geometry::{MapBounds, ResizeDebouncer, Viewport, camera_for};
pub use input::{InputState, MoveBinding};
pub use snapshot::Snapshot;
pub use state::{Direction, Enemy, GameEvent, GameOverInfo, GameState, Player, Projectile};
pub use tick::{TickInput, tick};
pub use tier::{TierStats, spawn_chance, tier_for_ticks};
