//! Procedural creature rig
//!
//! A creature is drawn as a small tree of circles: a core with a head and
//! three tail segments, and two ears and a nose riding on the head. Each part
//! stores only its offset, size (diameter) and rotation relative to its
//! parent; world transforms are resolved top-down when the scene is built.
//!
//! While the creature moves, part sizes breathe on phase-shifted sine waves
//! whose frequency drops and amplitude grows with speed, and the head and
//! tail stretch away from the core. When it stops, the rig freezes in place.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEADZONE, RIG_SPEED_CAP};
use crate::polar_to_cartesian;

/// Named body parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartId {
    Core,
    Head,
    LeftEar,
    RightEar,
    Nose,
    Tail1,
    Tail2,
    Tail3,
}

impl PartId {
    pub const ALL: [PartId; 8] = [
        PartId::Core,
        PartId::Head,
        PartId::LeftEar,
        PartId::RightEar,
        PartId::Nose,
        PartId::Tail1,
        PartId::Tail2,
        PartId::Tail3,
    ];

    /// Tail segments, base first
    pub const TAIL: [PartId; 3] = [PartId::Tail1, PartId::Tail2, PartId::Tail3];
}

/// One node of the rig, owning its children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPart {
    pub id: PartId,
    /// Offset from the parent, in the parent's frame
    pub offset: Vec2,
    /// Diameter
    pub size: f32,
    /// Rotation relative to the parent
    pub rotation: f32,
    pub children: Vec<BodyPart>,
}

impl BodyPart {
    fn leaf(id: PartId, offset: Vec2, size: f32) -> Self {
        Self {
            id,
            offset,
            size,
            rotation: 0.0,
            children: Vec::new(),
        }
    }

    fn find(&self, id: PartId) -> Option<&BodyPart> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn find_mut(&mut self, id: PartId) -> Option<&mut BodyPart> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

/// A body part resolved into world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartTransform {
    pub id: PartId,
    pub position: Vec2,
    pub rotation: f32,
    pub size: f32,
}

/// Lateral tail wag: (amplitude, phase offset) per segment
const TAIL_WAG: [(f32, f32); 3] = [(1.0, 0.0), (3.0, 1.0), (6.0, 2.0)];

/// Rest y offsets of the tail segments and how far each stretches at full speed
const TAIL_REST_Y: [f32; 3] = [-9.0, -13.0, -17.0];
const TAIL_STRETCH: [f32; 3] = [5.0, 10.0, 15.0];

const HEAD_REST_Y: f32 = 10.0;
const HEAD_STRETCH: f32 = 13.0;

/// Creature rig: the part tree plus its move-phase clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    /// Root of the tree; its rotation is the creature's heading
    pub core: BodyPart,
    /// Ticks spent moving (frozen while still)
    pub move_phase: u64,
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}

impl Rig {
    /// Build the rig in its rest pose
    pub fn new() -> Self {
        let head = BodyPart {
            id: PartId::Head,
            offset: Vec2::new(0.0, HEAD_REST_Y),
            size: 18.0,
            rotation: 0.0,
            children: vec![
                BodyPart::leaf(PartId::LeftEar, polar_to_cartesian(8.0, 7.0 * PI / 8.0), 7.0),
                BodyPart::leaf(PartId::RightEar, polar_to_cartesian(8.0, PI / 8.0), 7.0),
                BodyPart::leaf(PartId::Nose, polar_to_cartesian(10.0, 2.0 * PI / 4.0), 5.0),
            ],
        };

        let mut children = vec![head];
        for (id, y) in PartId::TAIL.into_iter().zip(TAIL_REST_Y) {
            children.push(BodyPart::leaf(id, Vec2::new(0.0, y), 5.0));
        }

        Self {
            core: BodyPart {
                id: PartId::Core,
                offset: Vec2::ZERO,
                size: 20.0,
                rotation: 0.0,
                children,
            },
            move_phase: 0,
        }
    }

    pub fn part(&self, id: PartId) -> Option<&BodyPart> {
        self.core.find(id)
    }

    pub fn part_mut(&mut self, id: PartId) -> Option<&mut BodyPart> {
        self.core.find_mut(id)
    }

    /// Current diameter of a part
    pub fn size(&self, id: PartId) -> f32 {
        self.part(id).map_or(0.0, |p| p.size)
    }

    /// Size table in `PartId::ALL` order
    pub fn sizes(&self) -> [f32; 8] {
        PartId::ALL.map(|id| self.size(id))
    }

    pub fn heading(&self) -> f32 {
        self.core.rotation
    }

    /// Head rotation relative to the body
    pub fn head_rotation(&self) -> f32 {
        self.part(PartId::Head).map_or(0.0, |p| p.rotation)
    }

    pub fn set_head_rotation(&mut self, rotation: f32) {
        if let Some(head) = self.part_mut(PartId::Head) {
            head.rotation = rotation;
        }
    }

    fn set_size(&mut self, id: PartId, size: f32) {
        if let Some(part) = self.part_mut(id) {
            part.size = size;
        }
    }

    fn set_offset_y(&mut self, id: PartId, y: f32) {
        if let Some(part) = self.part_mut(id) {
            part.offset.y = y;
        }
    }

    /// Animate the rig for one tick from a relative velocity.
    ///
    /// `u`, `v` are in units of the creature's max speed. Returns whether the
    /// creature counted as moving; when it doesn't, nothing changes.
    pub fn update(&mut self, u: f32, v: f32) -> bool {
        if !(u.abs() > DEADZONE || v.abs() > DEADZONE) {
            return false;
        }

        let vel = (u * u + v * v).sqrt().min(RIG_SPEED_CAP);
        self.move_phase += 1;
        let [core, head, tail1, tail2, tail3] = breathe(self.move_phase, vel);
        let ear = 7.0 * head / 20.0;
        let nose = 5.0 * head / 20.0;

        self.core.size = core;
        self.set_size(PartId::Head, head);
        self.set_size(PartId::LeftEar, ear);
        self.set_size(PartId::RightEar, ear);
        self.set_size(PartId::Nose, nose);
        self.set_size(PartId::Tail1, tail1);
        self.set_size(PartId::Tail2, tail2);
        self.set_size(PartId::Tail3, tail3);

        self.core.rotation = v.atan2(u) - FRAC_PI_2;

        if let Some(head) = self.part_mut(PartId::Head) {
            head.offset = Vec2::new(0.0, HEAD_REST_Y + HEAD_STRETCH * vel);
        }
        for ((id, rest), stretch) in PartId::TAIL.into_iter().zip(TAIL_REST_Y).zip(TAIL_STRETCH) {
            self.set_offset_y(id, rest - stretch * vel);
        }

        true
    }

    /// Swing the tail sideways; independent of movement
    pub fn wag_tail(&mut self, phase: u64) {
        let phase = phase as f64;
        for (id, (amplitude, offset)) in PartId::TAIL.into_iter().zip(TAIL_WAG) {
            if let Some(part) = self.part_mut(id) {
                part.offset.x = amplitude * (0.1 * phase - offset as f64).sin() as f32;
            }
        }
    }

    /// Resolve every part into world space, parents before children
    pub fn world_parts(&self, position: Vec2) -> Vec<PartTransform> {
        let mut out = Vec::with_capacity(PartId::ALL.len());
        resolve(&self.core, position, 0.0, &mut out);
        out
    }
}

/// Core, head and tail sizes at a given move phase.
///
/// Phases are taken in f64 so the animation keeps moving over long sessions.
fn breathe(move_phase: u64, vel: f32) -> [f32; 5] {
    let t = move_phase as f64;
    let vel = vel as f64;
    let f = 2.0 - vel;
    let amp = 1.0 + vel;
    [
        20.0 + amp * (f * t / 10.0).sin(),
        20.0 + amp * (f * (t + 10.0) / 10.0).sin(),
        7.0 + (0.25 + 0.5 * vel) * (f * (t - 10.0) / 5.0).sin(),
        7.0 + amp * (f * (t - 20.0) / 5.0).sin(),
        7.0 + amp * (f * (t - 30.0) / 5.0).sin(),
    ]
    .map(|size| size as f32)
}

fn resolve(part: &BodyPart, parent_pos: Vec2, parent_rot: f32, out: &mut Vec<PartTransform>) {
    let position = parent_pos + Vec2::from_angle(parent_rot).rotate(part.offset);
    let rotation = parent_rot + part.rotation;
    out.push(PartTransform {
        id: part.id,
        position,
        rotation,
        size: part.size,
    });
    for child in &part.children {
        resolve(child, position, rotation, out);
    }
}
