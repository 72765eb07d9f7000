//! Game session: the tick/render scheduler
//!
//! Owns the simulation state and everything that feeds it. The platform glue
//! forwards raw events here and calls [`Session::frame`] once per display
//! frame; a [`Snapshot`] comes back only when a tick completed.

use crate::clock::FixedStepClock;
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GameOverInfo, GameState, InputState, ResizeDebouncer, Snapshot, TickInput,
    Viewport, tick,
};

/// Result of one display frame
#[derive(Debug, Default)]
pub struct FrameOutcome {
    /// Present when a tick ran this frame
    pub snapshot: Option<Snapshot>,
    /// Events from the tick, in order
    pub events: Vec<GameEvent>,
    /// Set on the frame the run ended
    pub game_over: Option<GameOverInfo>,
}

impl FrameOutcome {
    pub fn stepped(&self) -> bool {
        self.snapshot.is_some()
    }
}

pub struct Session {
    state: GameState,
    clock: FixedStepClock,
    input: InputState,
    resize: ResizeDebouncer,
    settings: Settings,
    /// A display frame is already scheduled
    frame_requested: bool,
}

impl Session {
    /// Create an inactive session; call [`Session::activate`] to start play
    pub fn new(viewport: Viewport, seed: u64, settings: Settings) -> Self {
        Self {
            state: GameState::new(viewport, seed),
            clock: FixedStepClock::default(),
            input: InputState::new(),
            resize: ResizeDebouncer::new(),
            settings,
            frame_requested: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    /// Enter play: fresh run state and a fresh clock baseline
    pub fn activate(&mut self, seed: u64) {
        self.state = GameState::new(self.state.viewport, seed);
        self.clock.activate();
        log::info!("Run started with seed {}", seed);
    }

    /// Leave play; no ticks run until the next activation
    pub fn deactivate(&mut self) {
        self.clock.deactivate();
    }

    /// Restart request from the screen flow
    pub fn restart(&mut self, seed: u64) {
        self.input.clear();
        self.activate(seed);
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.press(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.release(key);
    }

    /// Window lost focus: held keys will never see their key-up
    pub fn release_all_keys(&mut self) {
        self.input.clear();
    }

    /// Flip the HUD preference, returning the new value
    pub fn toggle_hud(&mut self) -> bool {
        self.settings.show_hud = !self.settings.show_hud;
        let label = if self.settings.show_hud { "shown" } else { "hidden" };
        log::debug!("HUD {}", label);
        self.settings.show_hud
    }

    /// Frames only do work while playing or while a resize is settling
    pub fn wants_frames(&self) -> bool {
        self.clock.is_active() || self.resize.is_pending()
    }

    /// Claim the next display frame; true when the caller should schedule one.
    ///
    /// At most one frame is outstanding. The claim is released by
    /// [`Session::frame`].
    pub fn should_request_frame(&mut self) -> bool {
        if self.frame_requested || !self.wants_frames() {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Queue a window resize; applied once it settles
    pub fn request_resize(&mut self, width: f32, height: f32, now_ms: f64) {
        self.resize.request(Viewport::from_window(width, height), now_ms);
    }

    /// Drive one display frame
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        self.frame_requested = false;
        if let Some(viewport) = self.resize.poll(now_ms) {
            log::info!("Viewport resized to {}x{}", viewport.width, viewport.height);
            self.state.set_viewport(viewport);
        }

        if !self.clock.on_frame(now_ms) {
            return FrameOutcome::default();
        }

        let input = TickInput {
            keys: self.input.clone(),
            now_ms,
        };
        let events = tick(&mut self.state, &input);

        let game_over = events.iter().find_map(|e| match e {
            GameEvent::GameOver(info) => Some(*info),
            _ => None,
        });
        if game_over.is_some() {
            self.clock.deactivate();
        }

        let mut snapshot = Snapshot::capture(&self.state);
        if self.settings.reduced_motion {
            snapshot.player.flashing = false;
        }

        FrameOutcome {
            snapshot: Some(snapshot),
            events,
            game_over,
        }
    }
}
