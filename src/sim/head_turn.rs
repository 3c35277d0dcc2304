//! Idle head scanning
//!
//! A creature standing still looks slowly left and right on a fixed timed
//! script. Any movement cancels the script on the same tick and snaps the
//! head straight.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};

use serde::{Deserialize, Serialize};

use crate::consts::{DEADZONE, TICKS_PER_TIME_UNIT};

/// One step of the scan script
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Wait { units: u32 },
    Rotate { angle: f32, units: u32 },
}

impl Step {
    fn ticks(self) -> u32 {
        match self {
            Step::Wait { units } | Step::Rotate { units, .. } => units * TICKS_PER_TIME_UNIT,
        }
    }

    fn angle(self) -> f32 {
        match self {
            Step::Wait { .. } => 0.0,
            Step::Rotate { angle, .. } => angle,
        }
    }
}

/// Look right, wait, sweep left, wait, return to center
const SCAN_SCRIPT: [Step; 6] = [
    Step::Wait { units: 1 },
    Step::Rotate { angle: -FRAC_PI_8, units: 1 },
    Step::Wait { units: 2 },
    Step::Rotate { angle: FRAC_PI_4, units: 2 },
    Step::Wait { units: 2 },
    Step::Rotate { angle: -FRAC_PI_8, units: 1 },
];

/// Head-turn state: locked straight ahead, or partway through a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadTurn {
    #[default]
    Locked,
    Scanning {
        stage: usize,
        elapsed: u32,
    },
}

impl HeadTurn {
    pub fn is_scanning(&self) -> bool {
        matches!(self, HeadTurn::Scanning { .. })
    }

    /// Advance one tick given the creature's current speed.
    ///
    /// Returns the head rotation to apply for this tick.
    pub fn update(&mut self, speed: f32) -> f32 {
        if speed >= DEADZONE {
            if self.is_scanning() {
                log::debug!("Head scan cancelled by movement");
            }
            *self = HeadTurn::Locked;
            return 0.0;
        }

        match *self {
            HeadTurn::Locked => {
                *self = HeadTurn::Scanning {
                    stage: 0,
                    elapsed: 0,
                };
                0.0
            }
            HeadTurn::Scanning { stage, elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed < SCAN_SCRIPT[stage].ticks() {
                    *self = HeadTurn::Scanning { stage, elapsed };
                } else if stage + 1 < SCAN_SCRIPT.len() {
                    *self = HeadTurn::Scanning {
                        stage: stage + 1,
                        elapsed: 0,
                    };
                } else {
                    // Script finished; the next still tick starts another scan
                    *self = HeadTurn::Locked;
                    return 0.0;
                }
                self.rotation()
            }
        }
    }

    /// Head rotation implied by the current position in the script
    pub fn rotation(&self) -> f32 {
        let HeadTurn::Scanning { stage, elapsed } = *self else {
            return 0.0;
        };
        let done: f32 = SCAN_SCRIPT[..stage].iter().map(|s| s.angle()).sum();
        let current = SCAN_SCRIPT[stage];
        done + current.angle() * elapsed as f32 / current.ticks() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn scan_duration_ticks() -> u32 {
        SCAN_SCRIPT.iter().map(|s| s.ticks()).sum()
    }

    #[test]
    fn test_scan_duration() {
        assert_eq!(scan_duration_ticks(), 9 * 60);
    }

    #[test]
    fn test_starts_when_still() {
        let mut head = HeadTurn::Locked;
        assert_eq!(head.update(0.0), 0.0);
        assert!(head.is_scanning());
    }

    #[test]
    fn test_scan_profile() {
        let mut head = HeadTurn::Locked;
        head.update(0.0);

        // First time unit is a pause
        let mut rotation = 0.0;
        for _ in 0..60 {
            rotation = head.update(0.0);
        }
        assert!(approx(rotation, 0.0));

        // Then the head turns -π/8 over one time unit
        for _ in 0..60 {
            rotation = head.update(0.0);
        }
        assert!(approx(rotation, -FRAC_PI_8));

        // Wait, then sweep +π/4 over two units
        for _ in 0..120 {
            rotation = head.update(0.0);
        }
        assert!(approx(rotation, -FRAC_PI_8));
        for _ in 0..60 {
            rotation = head.update(0.0);
        }
        assert!(approx(rotation, 0.0));
        for _ in 0..60 {
            rotation = head.update(0.0);
        }
        assert!(approx(rotation, FRAC_PI_8));
    }

    #[test]
    fn test_completes_and_restarts() {
        let mut head = HeadTurn::Locked;
        head.update(0.0);
        for _ in 0..scan_duration_ticks() {
            head.update(0.0);
        }
        assert_eq!(head, HeadTurn::Locked);
        assert_eq!(head.rotation(), 0.0);

        head.update(0.0);
        assert_eq!(head, HeadTurn::Scanning { stage: 0, elapsed: 0 });
    }

    #[test]
    fn test_movement_cancels_immediately() {
        let mut head = HeadTurn::Locked;
        head.update(0.0);
        for _ in 0..150 {
            head.update(0.01);
        }
        assert!(head.rotation() < 0.0);

        assert_eq!(head.update(0.05), 0.0);
        assert_eq!(head, HeadTurn::Locked);
    }

    #[test]
    fn test_locked_while_moving() {
        let mut head = HeadTurn::Locked;
        for _ in 0..10 {
            assert_eq!(head.update(0.8), 0.0);
        }
        assert_eq!(head, HeadTurn::Locked);
    }
}
