//! Autonomous wolf movement
//!
//! The wolf wanders along a sum of sinusoids with co-prime-ish periods, which
//! looks random on screen but is a pure function of the wolf's own tick
//! counter.

use std::f64::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Deterministic wandering-path generator.
///
/// `next_velocity` advances the path; the tick loop calls it exactly once per
/// frame and caches the result on the wolf. Any other caller would push the
/// wolf further along its path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WolfMotion {
    /// Ticks elapsed since the generator started
    pub ticks: u64,
}

impl WolfMotion {
    pub fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Velocity at a given tick count (units per tick)
    pub fn velocity_at(ticks: u64) -> Vec2 {
        // Phases in f64 so long sessions don't drift
        let t = ticks as f64;
        let speed_x = -5.0 * (TAU * t / 700.0).sin() + 2.0 * (TAU * t / 400.0).sin();
        let speed_y = -5.0 * (TAU * t / 2300.0).cos() + 3.0 * (TAU * t / 400.0).cos();
        Vec2::new(speed_x as f32, speed_y as f32)
    }

    /// Velocity for the current tick, then advance one tick
    pub fn next_velocity(&mut self) -> Vec2 {
        let velocity = Self::velocity_at(self.ticks);
        self.ticks += 1;
        velocity
    }
}

/// Velocity expressed as a fraction of max speed (animation intensity input)
#[inline]
pub fn relative_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    velocity / max_speed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_velocity_at_start() {
        let mut motion = WolfMotion::new();
        let v = motion.next_velocity();
        assert!(approx(v.x, 0.0));
        assert!(approx(v.y, -2.0));
        assert_eq!(motion.ticks, 1);
    }

    #[test]
    fn test_velocity_half_period() {
        let v = WolfMotion::velocity_at(350);
        assert!(approx(v.x, -1.414_213_5));
        assert!(approx(v.y, -0.762_081_3));
    }

    #[test]
    fn test_velocity_full_period() {
        let v = WolfMotion::velocity_at(700);
        assert!(approx(v.x, -2.0));
        assert!(approx(v.y, 1.674_398));
    }

    #[test]
    fn test_determinism() {
        let mut a = WolfMotion { ticks: 123 };
        let mut b = WolfMotion { ticks: 123 };
        for _ in 0..5000 {
            assert_eq!(a.next_velocity(), b.next_velocity());
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_each_call_advances_path() {
        let mut motion = WolfMotion::new();
        let first = motion.next_velocity();
        let second = motion.next_velocity();
        assert_ne!(first, second);
        assert_eq!(second, WolfMotion::velocity_at(1));
    }

    #[test]
    fn test_speed_stays_in_tuned_range() {
        // Components are bounded by the sum of amplitudes
        for t in 0..20_000 {
            let v = WolfMotion::velocity_at(t);
            assert!(v.x.abs() <= 7.0 + 1e-4);
            assert!(v.y.abs() <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn test_relative_speed() {
        let rel = relative_speed(Vec2::new(3.5, -7.0), 7.0);
        assert!(approx(rel.x, 0.5));
        assert!(approx(rel.y, -1.0));
    }
}
