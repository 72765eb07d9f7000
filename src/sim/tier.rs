//! Difficulty tiers
//!
//! Tier is a pure function of survival ticks; each tier fixes enemy stats.

use crate::consts::TICKS_PER_SECOND;

/// Ticks at which tiers 2, 3 and 4 unlock (30s, 60s, 90s)
pub const TIER_THRESHOLDS: [u64; 3] = [
    30 * TICKS_PER_SECOND,
    60 * TICKS_PER_SECOND,
    90 * TICKS_PER_SECOND,
];

pub const MAX_TIER: u8 = 4;

/// Enemy stats for one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierStats {
    pub visuals: &'static [&'static str],
    pub health: i32,
    pub speed: f32,
    pub damage: i32,
}

const TIERS: [TierStats; MAX_TIER as usize] = [
    TierStats {
        visuals: &["🍓"],
        health: 1,
        speed: 1.0,
        damage: 5,
    },
    TierStats {
        visuals: &["🍎"],
        health: 2,
        speed: 1.2,
        damage: 8,
    },
    TierStats {
        visuals: &["🍊"],
        health: 3,
        speed: 1.4,
        damage: 12,
    },
    TierStats {
        visuals: &["🍌"],
        health: 4,
        speed: 1.6,
        damage: 15,
    },
];

impl TierStats {
    /// Stats for a tier; out-of-range tiers clamp into 1..=4
    pub fn for_tier(tier: u8) -> &'static TierStats {
        let idx = tier.clamp(1, MAX_TIER) as usize - 1;
        &TIERS[idx]
    }
}

/// Current tier for elapsed survival ticks
pub fn tier_for_ticks(game_time: u64) -> u8 {
    1 + TIER_THRESHOLDS.iter().filter(|&&t| game_time >= t).count() as u8
}

/// Per-tick spawn probability
pub fn spawn_chance(tier: u8) -> f64 {
    0.008 + (tier.clamp(1, MAX_TIER) - 1) as f64 * 0.002
}
