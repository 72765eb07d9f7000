//! Fruit Survivor - A browser arcade survivor game
//!
//! Core modules:
//! - `sim`: Simulation core (movement, spawning, combat, game state)
//! - `clock`: Fixed-step clock decoupled from display refresh
//! - `session`: Tick/render scheduler the platform glue drives
//! - `settings`: Player preferences

pub mod clock;
pub mod session;
pub mod settings;
pub mod sim;

pub use clock::FixedStepClock;
pub use session::{FrameOutcome, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Minimum wall time between simulation steps (~60 Hz)
    pub const TICK_INTERVAL_MS: f64 = 16.0;
    /// Nominal ticks per second (used for tier thresholds and HUD time)
    pub const TICKS_PER_SECOND: u64 = 60;

    /// Map is this many times larger than the viewport on each axis
    pub const MAP_SCALE: f32 = 3.0;
    /// Viewport floor for very small windows
    pub const MIN_VIEWPORT_WIDTH: f32 = 320.0;
    pub const MIN_VIEWPORT_HEIGHT: f32 = 240.0;
    /// Resize requests settle for this long before geometry changes
    pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_HALF_EXTENT: f32 = 48.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_DAMAGE: i32 = 1;

    /// Auto-fire
    pub const FIRE_COOLDOWN_MS: f64 = 500.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;
    /// Projectile hits an enemy closer than this
    pub const HIT_RADIUS: f32 = 25.0;

    /// Contact damage
    pub const CONTACT_RADIUS: f32 = 40.0;
    pub const CONTACT_COOLDOWN_MS: f64 = 1000.0;
    /// How long the hurt flash stays on
    pub const FLASH_DURATION_MS: f64 = 500.0;

    /// Enemies appear this far outside the visible area
    pub const SPAWN_OFFSET: f32 = 50.0;
    /// Score per kill is tier * this
    pub const SCORE_PER_TIER: u64 = 10;
}
