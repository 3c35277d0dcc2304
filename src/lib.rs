//! A Dog's Life - a tilt-controlled meadow chase
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rigs, input mapping, wolf path, trails, camera)
//! - `renderer`: Renderer-agnostic draw list and triangle tessellation
//! - `audio`: Sound effect catalogue and volume handling
//! - `settings`: JSON-backed game configuration

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundBackend, SoundEffect};
pub use settings::{Settings, SettingsError};
pub use sim::{FollowTarget, WolfControl};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per rendered frame)
    pub const SIM_HZ: u32 = 60;
    /// Ticks per game time unit (action durations are given in time units)
    pub const TICKS_PER_TIME_UNIT: u32 = SIM_HZ;

    /// Half-width of the square playable field, centered at the origin
    pub const FIELD_SIZE: f32 = 600.0;

    /// Input magnitude at or below which an axis reads as zero
    pub const DEADZONE: f32 = 0.05;
    /// Input magnitude at or above which an axis saturates at max speed
    pub const SATURATION: f32 = 1.0;

    /// Creature defaults
    pub const DOG_MAX_SPEED: f32 = 10.0;
    pub const WOLF_MAX_SPEED: f32 = 7.0;
    /// Ticks in a gait cycle at rest (speed extends it)
    pub const GAIT_PERIOD: f32 = 15.0;
    /// Paw placement radius around the creature center
    pub const CREATURE_RADIUS: f32 = 10.0;
    /// Base silhouette of the dog's core (width, height); drives the contact radius
    pub const DOG_BASE_SIZE: (f32, f32) = (20.0, 20.0);
    pub const WOLF_START_HEALTH: i32 = 100;

    /// Animation intensity cap (does not limit actual movement)
    pub const RIG_SPEED_CAP: f32 = 0.7;

    /// Footprint fade duration (1.5 time units)
    pub const FOOTPRINT_FADE_TICKS: u32 = 90;

    /// Meadow population
    pub const FLOWER_COUNT: usize = 200;
    pub const TREES_PER_AXIS: usize = 100;
    pub const TREE_SIZE: f32 = 150.0;
    /// Forest band thickness outside the field
    pub const FOREST_BAND: f32 = 300.0;

    /// Default viewport (portrait phone, points)
    pub const VIEWPORT_WIDTH: f32 = 375.0;
    pub const VIEWPORT_HEIGHT: f32 = 667.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Side of the origin a coordinate lies on, as +1 or -1.
///
/// Zero resolves to +1 so edge placement never divides by zero.
#[inline]
pub fn side_sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
