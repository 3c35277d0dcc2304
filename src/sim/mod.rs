//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only (meadow generation)
//! - No rendering, audio or platform dependencies

pub mod camera;
pub mod encounter;
pub mod head_turn;
pub mod input;
pub mod meadow;
pub mod rig;
pub mod state;
pub mod tick;
pub mod trail;
pub mod wolf;

pub use camera::{Camera, clamp_to_field, move_creature};
pub use encounter::{HealthLabel, check_encounter, contact_radius};
pub use head_turn::HeadTurn;
pub use input::{Calibration, TiltSource, map_tilt_to_velocity};
pub use meadow::Meadow;
pub use rig::{BodyPart, PartId, PartTransform, Rig};
pub use state::{Creature, CreatureKind, FollowTarget, GameEvent, GameState, Wolf, WolfControl};
pub use tick::{TickInput, tick};
pub use trail::{Footprint, maybe_emit_footprint};
pub use wolf::WolfMotion;
