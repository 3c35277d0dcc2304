//! Game state and core simulation types
//!
//! Everything the tick mutates lives here, so a snapshot of `GameState` is a
//! complete description of the game at a given frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::encounter::HealthLabel;
use super::head_turn::HeadTurn;
use super::input::Calibration;
use super::meadow::Meadow;
use super::rig::Rig;
use super::trail::Footprint;
use super::wolf::WolfMotion;
use crate::consts::*;

/// Which animal a creature is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    Dog,
    Wolf,
}

/// Which creature the camera keeps in view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FollowTarget {
    #[default]
    Dog,
    Wolf,
}

/// How the wolf picks its velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WolfControl {
    /// Wanders along its own deterministic path
    #[default]
    Autonomous,
    /// Steered by device tilt, like the dog (handy for testing)
    Tilt,
}

/// A dog or a wolf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub kind: CreatureKind,
    pub position: Vec2,
    /// Velocity applied this tick (units per tick)
    pub velocity: Vec2,
    pub max_speed: f32,
    /// Base gait cycle length in ticks
    pub gait: f32,
    /// Paw placement radius
    pub radius: f32,
    pub rig: Rig,
    pub head_turn: HeadTurn,
    /// Tail wags every tick
    pub wags_tail: bool,
    /// Looks around when standing still
    pub scans_when_idle: bool,
}

impl Creature {
    pub fn dog(position: Vec2) -> Self {
        Self::new(CreatureKind::Dog, position, DOG_MAX_SPEED, true)
    }

    pub fn wolf(position: Vec2) -> Self {
        Self::new(CreatureKind::Wolf, position, WOLF_MAX_SPEED, false)
    }

    fn new(kind: CreatureKind, position: Vec2, max_speed: f32, expressive: bool) -> Self {
        Self {
            kind,
            position,
            velocity: Vec2::ZERO,
            max_speed,
            gait: GAIT_PERIOD,
            radius: CREATURE_RADIUS,
            rig: Rig::new(),
            head_turn: HeadTurn::Locked,
            wags_tail: expressive,
            scans_when_idle: expressive,
        }
    }

    pub fn heading(&self) -> f32 {
        self.rig.heading()
    }

    /// Magnitude of this tick's velocity
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// The wolf: a creature plus its wandering clock and health
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wolf {
    pub body: Creature,
    pub motion: WolfMotion,
    /// Starts at 100; not floored at zero
    pub health: i32,
}

impl Wolf {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Creature::wolf(position),
            motion: WolfMotion::new(),
            health: WOLF_START_HEALTH,
        }
    }
}

/// Things the host reacts to (sound, HUD); drained every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Dog touched the wolf; carries the wolf's remaining health
    WolfHit { health: i32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the meadow was generated from
    pub seed: u64,
    /// Shared frame counter; advances every tick
    pub time_ticks: u64,
    pub dog: Creature,
    pub wolf: Wolf,
    pub camera: Camera,
    /// Live paw prints, oldest first
    pub footprints: Vec<Footprint>,
    pub health_label: HealthLabel,
    /// Neutral tilt, captured on the first tick
    pub calibration: Option<Calibration>,
    pub wolf_control: WolfControl,
    pub follow_target: FollowTarget,
    /// Static scenery
    pub meadow: Meadow,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New game with the default viewport and controls
    pub fn new(seed: u64) -> Self {
        Self::with_viewport(seed, Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT))
    }

    /// New game for a given viewport size
    pub fn with_viewport(seed: u64, viewport: Vec2) -> Self {
        // Both animals start mid-screen, the wolf just below the dog
        let center = viewport / 2.0;
        log::info!(
            "New game: seed={seed} viewport={}x{}",
            viewport.x,
            viewport.y
        );

        Self {
            seed,
            time_ticks: 0,
            dog: Creature::dog(center),
            wolf: Wolf::new(center - Vec2::new(0.0, 30.0)),
            camera: Camera::new(viewport),
            footprints: Vec::new(),
            health_label: HealthLabel::new(WOLF_START_HEALTH),
            calibration: None,
            wolf_control: WolfControl::default(),
            follow_target: FollowTarget::default(),
            meadow: Meadow::generate(seed, viewport.y),
            events: Vec::new(),
        }
    }

    /// Creature the camera follows
    pub fn followed(&self) -> &Creature {
        match self.follow_target {
            FollowTarget::Dog => &self.dog,
            FollowTarget::Wolf => &self.wolf.body,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
