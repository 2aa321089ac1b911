//! Program settings and preferences
//!
//! Audio and demo-run knobs only. The physics tuning is deliberately not
//! here; those numbers are fixed constants.

use serde::{Deserialize, Serialize};

/// Program settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,

    // === Demo run ===
    /// Fixed RNG seed; omit for a time-derived seed per run
    pub seed: Option<u64>,
    /// How long the demo runs, in seconds
    pub run_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
            run_seconds: 10.0,
        }
    }
}

impl Settings {
    /// Settings file, looked up in the working directory
    pub const FILE_NAME: &'static str = "multiball-settings.json";

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::FILE_NAME);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk; failures are logged, not fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::FILE_NAME, json) {
                    log::warn!("Could not save {}: {err}", Self::FILE_NAME);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}
