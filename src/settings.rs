//! Player preferences
//!
//! Persisted separately from the run in LocalStorage. Runs themselves are
//! never saved.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log verbosity ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    /// Show the health/time/score/enemies/tier readout
    pub show_hud: bool,
    /// Suppress the hurt flash
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_hud: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "fruit_survivor_settings";

    /// Parsed log level, falling back to Info on junk
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    return settings;
                }
                log::warn!("Ignoring unreadable settings");
            }
        }

        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native: read `FRUIT_SURVIVOR_SETTINGS` as JSON if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        std::env::var("FRUIT_SURVIVOR_SETTINGS")
            .ok()
            .and_then(|json| Self::from_json(&json))
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
