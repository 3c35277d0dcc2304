//! Tilt input mapping
//!
//! Raw device tilt arrives as a two-axis signal roughly in [-1, 1] per axis.
//! The first reading is taken as the neutral pose; every later reading is
//! expressed relative to it and scaled so both directions saturate at the
//! same distance from rest.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEADZONE, SATURATION};

/// Source of device tilt, read once per frame by the host
pub trait TiltSource {
    fn read_tilt(&mut self) -> Vec2;
}

/// Map one axis of (calibrated) tilt to a speed component
#[inline]
pub fn map_axis(raw: f32, max_speed: f32) -> f32 {
    let magnitude = raw.abs();
    if magnitude <= DEADZONE {
        0.0
    } else if magnitude < SATURATION {
        raw * max_speed
    } else {
        raw.signum() * max_speed
    }
}

/// Map a two-axis tilt to a velocity.
///
/// Axes are mapped independently, so a full diagonal tilt moves faster than
/// `max_speed`.
pub fn map_tilt_to_velocity(raw: Vec2, max_speed: f32) -> Vec2 {
    Vec2::new(map_axis(raw.x, max_speed), map_axis(raw.y, max_speed))
}

/// Neutral pose captured from the first tilt reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub baseline: Vec2,
    pub factor: Vec2,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            baseline: Vec2::ZERO,
            factor: Vec2::ONE,
        }
    }
}

impl Calibration {
    /// Derive the calibration from a resting reading
    pub fn capture(baseline: Vec2) -> Self {
        let factor = Vec2::new(axis_factor(baseline.x), axis_factor(baseline.y));
        log::info!(
            "Tilt calibrated: baseline=({:.3}, {:.3}) factor=({:.3}, {:.3})",
            baseline.x,
            baseline.y,
            factor.x,
            factor.y
        );
        Self { baseline, factor }
    }

    /// Express a raw reading relative to the neutral pose
    pub fn apply(&self, raw: Vec2) -> Vec2 {
        (raw - self.baseline) / self.factor
    }
}

fn axis_factor(baseline: f32) -> f32 {
    let factor = (1.0 - baseline).min(1.0 + baseline);
    if factor > 0.0 {
        factor
    } else {
        log::warn!("Degenerate tilt baseline {baseline:.3}, using unit scale");
        1.0
    }
}
