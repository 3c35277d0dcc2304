//! Renderer-agnostic drawing
//!
//! Produces a sorted list of screen-space primitives from the game state and
//! can tessellate it into colored triangles. Drawing them is the host's job.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Primitive, SceneOptions, Shape, build_scene, tessellate};
pub use vertex::{Vertex, colors};
