//! Field bounds and the follow camera
//!
//! The camera is an offset added to world positions to get screen positions.
//! It only moves when the followed creature leaves the middle third of the
//! viewport, and then by exactly the creature's velocity, so the creature is
//! held at the edge of the band instead of being re-centered.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Creature;
use crate::consts::FIELD_SIZE;

/// Move a creature and keep it on the field
pub fn move_creature(creature: &mut Creature, velocity: Vec2) {
    creature.position = clamp_to_field(creature.position + velocity);
}

/// Clamp a point to the square playable field
#[inline]
pub fn clamp_to_field(pos: Vec2) -> Vec2 {
    pos.clamp(Vec2::splat(-FIELD_SIZE), Vec2::splat(FIELD_SIZE))
}

/// Dead-zone follow camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World-to-screen translation
    pub offset: Vec2,
    /// Viewport size in screen units
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
        }
    }

    /// Screen position of a world point
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset
    }

    /// Whether a screen coordinate sits outside the middle third of `extent`
    fn outside_band(coord: f32, extent: f32) -> bool {
        coord <= extent / 3.0 || coord >= 2.0 * extent / 3.0
    }

    /// Pan to keep `target` inside the central band, per axis
    pub fn follow(&mut self, target: Vec2, velocity: Vec2) {
        let screen = self.to_screen(target);
        if Self::outside_band(screen.x, self.viewport.x) {
            self.offset.x -= velocity.x;
        }
        if Self::outside_band(screen.y, self.viewport.y) {
            self.offset.y -= velocity.y;
        }
    }
}
