//! Draw list construction
//!
//! Flattens the world into screen-space primitives sorted back to front. The
//! host's renderer draws them however it likes, or uses `tessellate` to get
//! plain colored triangles.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::TREE_SIZE;
use crate::sim::meadow::{FLOWER_PART_SIZE, petal_offsets};
use crate::sim::trail::{PAD_SIZE, TOE_SIZE};
use crate::sim::{Camera, Creature, CreatureKind, GameState, PartId};

/// Draw layers, back to front
pub mod layer {
    pub const FOOTPRINTS: f32 = 0.0;
    pub const FLOWERS: f32 = 0.5;
    pub const WOLF: f32 = 0.9;
    pub const DOG: f32 = 1.0;
    pub const FOREST: f32 = 2.0;
}

/// Primitive geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circle of the given diameter
    Circle { size: f32 },
    Rect { size: Vec2 },
    Label { text: String },
}

/// One thing to draw, in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub position: Vec2,
    pub rotation: f32,
    pub color: [f32; 4],
    pub z: f32,
}

impl Primitive {
    fn circle(position: Vec2, size: f32, color: [f32; 4], z: f32) -> Self {
        Self {
            shape: Shape::Circle { size },
            position,
            rotation: 0.0,
            color,
            z,
        }
    }
}

/// Options that change what gets drawn
#[derive(Debug, Clone, Copy)]
pub struct SceneOptions {
    pub show_health: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self { show_health: true }
    }
}

fn with_alpha(mut color: [f32; 4], alpha: f32) -> [f32; 4] {
    color[3] *= alpha;
    color
}

fn part_color(kind: CreatureKind, part: PartId) -> [f32; 4] {
    let (body, ears) = match kind {
        CreatureKind::Dog => (colors::DOG, colors::DOG_EARS),
        CreatureKind::Wolf => (colors::WOLF, colors::WOLF_EARS),
    };
    match part {
        PartId::LeftEar | PartId::RightEar => ears,
        PartId::Nose => colors::BLACK,
        PartId::Tail3 => colors::WHITE,
        PartId::Core | PartId::Head | PartId::Tail1 | PartId::Tail2 => body,
    }
}

fn push_creature(out: &mut Vec<Primitive>, camera: &Camera, creature: &Creature, z: f32) {
    for part in creature.rig.world_parts(creature.position) {
        out.push(Primitive {
            shape: Shape::Circle { size: part.size },
            position: camera.to_screen(part.position),
            rotation: part.rotation,
            color: part_color(creature.kind, part.id),
            z,
        });
    }
}

/// Build the draw list for the current frame
pub fn build_scene(state: &GameState, options: SceneOptions) -> Vec<Primitive> {
    let camera = &state.camera;
    let meadow = &state.meadow;
    let mut out = Vec::with_capacity(
        meadow.flowers.len() * 7 + meadow.trees.len() + state.footprints.len() * 4 + 32,
    );

    for print in &state.footprints {
        let color = with_alpha(colors::BLACK, print.opacity());
        out.push(Primitive {
            rotation: print.rotation,
            ..Primitive::circle(camera.to_screen(print.position), PAD_SIZE, color, layer::FOOTPRINTS)
        });
        for toe in print.toes() {
            out.push(Primitive::circle(camera.to_screen(toe), TOE_SIZE, color, layer::FOOTPRINTS));
        }
    }

    let petals = petal_offsets();
    for flower in &meadow.flowers {
        let center = camera.to_screen(*flower);
        out.push(Primitive::circle(center, FLOWER_PART_SIZE, colors::BLACK, layer::FLOWERS));
        for petal in petals {
            out.push(Primitive::circle(center + petal, FLOWER_PART_SIZE, colors::WHITE, layer::FLOWERS));
        }
        out.push(Primitive::circle(center, FLOWER_PART_SIZE, colors::YELLOW, layer::FLOWERS));
    }

    push_creature(&mut out, camera, &state.wolf.body, layer::WOLF);
    if options.show_health {
        let label = &state.health_label;
        let heading = state.wolf.body.heading();
        let world = state.wolf.body.position + Vec2::from_angle(heading).rotate(label.offset);
        out.push(Primitive {
            shape: Shape::Label {
                text: label.text.clone(),
            },
            position: camera.to_screen(world),
            rotation: heading + label.rotation,
            color: colors::BLACK,
            z: layer::WOLF,
        });
    }
    push_creature(&mut out, camera, &state.dog, layer::DOG);

    for band in &meadow.forest {
        out.push(Primitive {
            shape: Shape::Rect { size: band.size },
            position: camera.to_screen(band.center),
            rotation: 0.0,
            color: colors::FOREST,
            z: layer::FOREST,
        });
    }
    for tree in &meadow.trees {
        out.push(Primitive::circle(camera.to_screen(*tree), TREE_SIZE, colors::FOREST, layer::FOREST));
    }

    // Stable: keeps parents under children within a layer
    out.sort_by(|a, b| a.z.total_cmp(&b.z));
    out
}

/// Turn circles and rectangles into triangles; labels are left to the host
pub fn tessellate(primitives: &[Primitive], circle_segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for prim in primitives {
        match &prim.shape {
            Shape::Circle { size } => {
                vertices.extend(shapes::circle(prim.position, size / 2.0, prim.color, circle_segments));
            }
            Shape::Rect { size } => {
                vertices.extend(shapes::rect(prim.position, *size, prim.rotation, prim.color));
            }
            Shape::Label { .. } => {}
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_scene_sorted_by_layer() {
        let mut state = GameState::new(3);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        let scene = build_scene(&state, SceneOptions::default());
        assert!(scene.windows(2).all(|w| w[0].z <= w[1].z));
        assert_eq!(scene.last().unwrap().z, layer::FOREST);
    }

    #[test]
    fn test_scene_counts() {
        let state = GameState::new(3);
        let scene = build_scene(&state, SceneOptions::default());
        // 7 circles per flower, 8 parts per creature, a label, 4 bands, 200 trees
        assert_eq!(scene.len(), 200 * 7 + 16 + 1 + 4 + 200);

        let hidden = build_scene(&state, SceneOptions { show_health: false });
        assert_eq!(hidden.len(), scene.len() - 1);
        assert!(!hidden.iter().any(|p| matches!(p.shape, Shape::Label { .. })));
    }

    #[test]
    fn test_dog_parents_before_children() {
        let state = GameState::new(3);
        let scene = build_scene(&state, SceneOptions::default());
        let dog: Vec<&Primitive> = scene.iter().filter(|p| p.z == layer::DOG).collect();
        assert_eq!(dog.len(), 8);
        // Core first, at the dog's screen position
        assert_eq!(dog[0].position, state.camera.to_screen(state.dog.position));
        assert_eq!(dog[0].shape, Shape::Circle { size: 20.0 });
        assert_eq!(dog[0].color, colors::DOG);
    }

    #[test]
    fn test_camera_offset_applied() {
        let mut state = GameState::new(3);
        state.camera.offset = Vec2::new(-50.0, 20.0);
        let scene = build_scene(&state, SceneOptions::default());
        let core = scene.iter().find(|p| p.z == layer::DOG).unwrap();
        assert_eq!(core.position, state.dog.position + Vec2::new(-50.0, 20.0));
    }

    #[test]
    fn test_footprints_fade() {
        let mut state = GameState::new(3);
        tick(&mut state, &TickInput::default());
        for _ in 0..45 {
            tick(&mut state, &TickInput::default());
        }
        let scene = build_scene(&state, SceneOptions::default());
        let prints: Vec<&Primitive> = scene.iter().filter(|p| p.z == layer::FOOTPRINTS).collect();
        assert!(!prints.is_empty());
        assert!(prints.iter().all(|p| p.color[3] <= 1.0 && p.color[3] > 0.0));
        assert!(prints.iter().any(|p| p.color[3] < 1.0));
    }

    #[test]
    fn test_tessellate_skips_labels() {
        let prims = vec![
            Primitive::circle(Vec2::ZERO, 10.0, colors::WHITE, 0.0),
            Primitive {
                shape: Shape::Label {
                    text: "100".into(),
                },
                position: Vec2::ZERO,
                rotation: 0.0,
                color: colors::BLACK,
                z: 0.0,
            },
            Primitive {
                shape: Shape::Rect {
                    size: Vec2::new(2.0, 2.0),
                },
                position: Vec2::ZERO,
                rotation: 0.0,
                color: colors::FOREST,
                z: 0.0,
            },
        ];
        assert_eq!(tessellate(&prims, 8).len(), 8 * 3 + 6);
    }
}
