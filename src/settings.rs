//! Game settings and preferences
//!
//! Read from an optional JSON file; every field falls back to its default so
//! a partial file is fine.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::{FollowTarget, GameState, WolfControl};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Meadow seed
    pub seed: u64,

    // === Screen ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Show the wolf's health readout
    pub show_health: bool,

    // === Gameplay ===
    /// Creature the camera follows
    pub follow_target: FollowTarget,
    /// Autonomous wolf, or steer it by tilt
    pub wolf_control: WolfControl,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            show_health: true,

            follow_target: FollowTarget::Dog,
            wolf_control: WolfControl::Autonomous,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Failure to read a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Settings {
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Start a game configured by these settings
    pub fn new_game(&self) -> GameState {
        let mut state = GameState::with_viewport(self.seed, self.viewport());
        state.follow_target = self.follow_target;
        state.wolf_control = self.wolf_control;
        state
    }
}
