//! Fixed-step simulation clock
//!
//! Display frames arrive at whatever rate the browser likes; the clock turns
//! them into at most one logical step per frame, and only once a full tick
//! interval has passed since the previous step. There is no catch-up: a long
//! gap still yields a single step.

use crate::consts::TICK_INTERVAL_MS;

#[derive(Debug, Clone)]
pub struct FixedStepClock {
    interval_ms: f64,
    /// Timestamp of the last step, None until the first step after activation
    last_step_ms: Option<f64>,
    active: bool,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS)
    }
}

impl FixedStepClock {
    /// Create an inactive clock
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_step_ms: None,
            active: false,
        }
    }

    /// Start scheduling steps. Clears the baseline so the first frame steps
    /// immediately instead of catching up from a stale timestamp.
    pub fn activate(&mut self) {
        if !self.active {
            log::debug!("Clock activated");
        }
        self.active = true;
        self.last_step_ms = None;
    }

    /// Stop scheduling steps; later frames are ignored until reactivated
    pub fn deactivate(&mut self) {
        if self.active {
            log::debug!("Clock deactivated");
        }
        self.active = false;
        self.last_step_ms = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Called once per display frame. Returns true when one step is due.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        if !self.active {
            return false;
        }
        let due = self
            .last_step_ms
            .is_none_or(|last| now_ms - last >= self.interval_ms);
        if due {
            self.last_step_ms = Some(now_ms);
        }
        due
    }
}
