//! Dog/wolf contact
//!
//! While the dog overlaps the wolf, the wolf loses one point of health every
//! tick. There is no cooldown and no floor.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Wolf};
use crate::consts::DOG_BASE_SIZE;

/// Contact distance, from the dog's rest silhouette (not its animated size)
pub fn contact_radius() -> f32 {
    0.5 * (DOG_BASE_SIZE.0 + DOG_BASE_SIZE.1)
}

/// Health readout carried by the wolf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLabel {
    pub text: String,
    /// Offset from the wolf, in the wolf's frame
    pub offset: Vec2,
    /// Rotation relative to the wolf; cancels the wolf's heading
    pub rotation: f32,
}

impl HealthLabel {
    pub fn new(health: i32) -> Self {
        Self {
            text: health.to_string(),
            offset: Vec2::new(20.0, 20.0),
            rotation: 0.0,
        }
    }

    pub fn set_health(&mut self, health: i32) {
        self.text = health.to_string();
    }

    /// Keep the text upright for a wolf moving along (u, v)
    pub fn counter_rotate(&mut self, u: f32, v: f32) {
        self.rotation = FRAC_PI_2 - v.atan2(u);
    }
}

/// Check dog/wolf contact for this tick.
///
/// On contact, decrements the wolf's health, refreshes the label and returns
/// the hit event.
pub fn check_encounter(dog_pos: Vec2, wolf: &mut Wolf, label: &mut HealthLabel) -> Option<GameEvent> {
    if dog_pos.distance(wolf.body.position) >= contact_radius() {
        return None;
    }

    wolf.health -= 1;
    label.set_health(wolf.health);
    log::debug!("Wolf hit, health now {}", wolf.health);
    Some(GameEvent::WolfHit {
        health: wolf.health,
    })
}
