//! Static scenery: flowers on the meadow and the forest around it
//!
//! Generated once per game from the run seed, so the same seed always yields
//! the same meadow.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_SIZE, FLOWER_COUNT, FOREST_BAND, TREES_PER_AXIS};
use crate::{polar_to_cartesian, side_sign};

/// How far a tree may be pulled in from the field edge
const TREE_JITTER: i32 = 50;

/// Petal ring radius and part size of a flower
pub const PETAL_COUNT: usize = 5;
pub const PETAL_RING: f32 = 2.5;
pub const FLOWER_PART_SIZE: f32 = 5.0;

/// Axis-aligned rectangle given by center and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meadow {
    pub flowers: Vec<Vec2>,
    pub trees: Vec<Vec2>,
    /// Solid forest strips (right, left, top, bottom) so random trees leave no gaps
    pub forest: [Band; 4],
}

impl Meadow {
    /// Scatter flowers and trees for a seed.
    ///
    /// `viewport_height` sizes the side bands so they cover the screen at the
    /// field corners.
    pub fn generate(seed: u64, viewport_height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let field = FIELD_SIZE as i32;

        let flowers = (0..FLOWER_COUNT)
            .map(|_| {
                Vec2::new(
                    rng.random_range(-field..=field) as f32,
                    rng.random_range(-field..=field) as f32,
                )
            })
            .collect();

        let mut trees = Vec::with_capacity(TREES_PER_AXIS * 2);
        for _ in 0..TREES_PER_AXIS {
            let x = edge(&mut rng);
            let pull = rng.random_range(-TREE_JITTER..=0) as f32;
            let y = rng.random_range(-field..=field) as f32;
            trees.push(Vec2::new(x + side_sign(x) * pull, y));
        }
        for _ in 0..TREES_PER_AXIS {
            let x = rng.random_range(-field..=field) as f32;
            let y = edge(&mut rng);
            let pull = rng.random_range(-TREE_JITTER..=0) as f32;
            trees.push(Vec2::new(x, y + side_sign(y) * pull));
        }

        let offset = FIELD_SIZE + FOREST_BAND / 2.0;
        let side = Vec2::new(FOREST_BAND, 2.0 * (FIELD_SIZE + viewport_height / 3.0));
        let cap = Vec2::new(2.0 * FIELD_SIZE, FOREST_BAND);
        let forest = [
            Band { center: Vec2::new(offset, 0.0), size: side },
            Band { center: Vec2::new(-offset, 0.0), size: side },
            Band { center: Vec2::new(0.0, offset), size: cap },
            Band { center: Vec2::new(0.0, -offset), size: cap },
        ];

        log::debug!(
            "Meadow generated: {} flowers, {} trees",
            FLOWER_COUNT,
            trees.len()
        );

        Self {
            flowers,
            trees,
            forest,
        }
    }
}

/// Pick one of the two field edges
fn edge(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { -FIELD_SIZE } else { FIELD_SIZE }
}

/// Petal centers of a flower, relative to its center
pub fn petal_offsets() -> [Vec2; PETAL_COUNT] {
    std::array::from_fn(|i| polar_to_cartesian(PETAL_RING, TAU * i as f32 / PETAL_COUNT as f32))
}
