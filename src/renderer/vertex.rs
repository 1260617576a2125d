//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Textured 2D vertex in model space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            tex_coords: [u, v],
        }
    }
}

/// Two triangles covering `[x0, x1] × [y0, y1]`, sampling `[u0, u1] × [v0, v1]`
///
/// Texture v grows downward, so the bottom edge samples `v1`.
#[allow(clippy::too_many_arguments)]
pub fn quad(x0: f32, y0: f32, x1: f32, y1: f32, u0: f32, v0: f32, u1: f32, v1: f32) -> [Vertex; 6] {
    [
        Vertex::new(x0, y0, u0, v1),
        Vertex::new(x1, y0, u1, v1),
        Vertex::new(x1, y1, u1, v0),
        Vertex::new(x0, y0, u0, v1),
        Vertex::new(x1, y1, u1, v0),
        Vertex::new(x0, y1, u0, v0),
    ]
}
