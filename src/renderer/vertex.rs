//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const MEADOW: [f32; 4] = [0.0, 0.5, 0.0, 1.0]; // clear color
    pub const FOREST: [f32; 4] = [0.0, 0.41, 0.0, 1.0]; // #006900

    pub const DOG: [f32; 4] = [0.65, 0.16, 0.16, 1.0];
    pub const DOG_EARS: [f32; 4] = [0.65, 0.24, 0.07, 1.0]; // #a53e11
    pub const WOLF: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const WOLF_EARS: [f32; 4] = [0.7, 0.7, 0.7, 1.0]; // #b3b3b3

    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}
