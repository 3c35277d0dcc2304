//! Paw print trails
//!
//! Each creature leaves four prints per gait cycle, alternating sides so they
//! read as left and right paws. Faster creatures have longer cycles, which
//! spreads the prints out.

use std::f32::consts::{FRAC_PI_4, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Creature, CreatureKind};
use crate::consts::FOOTPRINT_FADE_TICKS;
use crate::polar_to_cartesian;

/// Distance of a print from the creature center, as a fraction of its radius
const PAW_SPREAD: f32 = 0.7;

/// Pad and toe sizes of a paw print
pub const PAD_SIZE: f32 = 5.0;
pub const TOE_SIZE: f32 = 2.5;

/// A fading paw print, owned by the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub owner: CreatureKind,
    pub position: Vec2,
    pub rotation: f32,
    pub spawn_tick: u64,
    /// Ticks since spawn
    pub age_ticks: u32,
}

impl Footprint {
    /// Remaining opacity, fading linearly to zero
    pub fn opacity(&self) -> f32 {
        1.0 - (self.age_ticks as f32 / FOOTPRINT_FADE_TICKS as f32).min(1.0)
    }

    pub fn is_faded(&self) -> bool {
        self.age_ticks >= FOOTPRINT_FADE_TICKS
    }

    /// Toe positions in world space
    pub fn toes(&self) -> [Vec2; 3] {
        let rot = Vec2::from_angle(self.rotation);
        [0, 1, 2].map(|i| {
            let local = polar_to_cartesian(PAD_SIZE, (2 + i) as f32 * PI / 6.0);
            self.position + rot.rotate(local)
        })
    }
}

/// Length of the gait cycle in ticks at a given speed
pub fn gait_cycle(gait: f32, speed: f32) -> u64 {
    ((gait + speed).floor() as u64).max(1)
}

/// Ticks within a cycle at which a print is left
pub fn trigger_ticks(cycle: u64) -> [u64; 4] {
    let m = cycle as f64;
    [
        0,
        (0.1 * m).floor() as u64,
        (0.6 * m).floor() as u64,
        (0.7 * m).floor() as u64,
    ]
}

/// Leave a print if this tick falls on one of the cycle's triggers
pub fn maybe_emit_footprint(creature: &Creature, world_tick: u64) -> Option<Footprint> {
    let cycle = gait_cycle(creature.gait, creature.speed());
    let phase = world_tick % cycle;
    let paw = trigger_ticks(cycle).iter().position(|&t| t == phase)?;

    let heading = creature.heading();
    let theta = heading + (-3.0 + 4.0 * paw as f32) * FRAC_PI_4;
    Some(Footprint {
        owner: creature.kind,
        position: creature.position + polar_to_cartesian(PAW_SPREAD * creature.radius, theta),
        rotation: heading,
        spawn_tick: world_tick,
        age_ticks: 0,
    })
}

/// Age every print by one tick and drop the ones that have faded out
pub fn age_footprints(footprints: &mut Vec<Footprint>) {
    for print in footprints.iter_mut() {
        print.age_ticks += 1;
    }
    footprints.retain(|p| !p.is_faded());
}
