//! Shared unit cube
//!
//! Every body part draws this one mesh, scaled by its own dimensions.
//!
//! ```text
//!     v6----- v5
//!    /|      /|
//!   v1------v0|
//!   | |     | |
//!   | |v7---|-|v4
//!   |/      |/
//!   v2------v3
//! ```

use static_assertions::assert_eq_size;

/// Vertex format: position plus flat RGB color
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

assert_eq_size!(CubeVertex, [f32; 6]);

const fn vertex(position: [f32; 3], color: [f32; 3]) -> CubeVertex {
    CubeVertex { position, color }
}

/// Corners of a cube centered on the origin with edge length 1
pub const CUBE_VERTICES: [CubeVertex; 8] = [
    vertex([0.5, 0.5, 0.5], [0.5, 0.5, 0.5]),    // v0 white
    vertex([-0.5, 0.5, 0.5], [0.5, 0.0, 0.5]),   // v1 magenta
    vertex([-0.5, -0.5, 0.5], [0.5, 0.0, 0.0]),  // v2 red
    vertex([0.5, -0.5, 0.5], [0.5, 0.5, 0.0]),   // v3 yellow
    vertex([0.5, -0.5, -0.5], [0.0, 0.5, 0.0]),  // v4 green
    vertex([0.5, 0.5, -0.5], [0.0, 0.5, 0.5]),   // v5 cyan
    vertex([-0.5, 0.5, -0.5], [0.0, 0.0, 0.5]),  // v6 blue
    vertex([-0.5, -0.5, -0.5], [0.0, 0.0, 0.0]), // v7 black
];

/// Two counter-clockwise triangles per face
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2,  0, 2, 3, // front
    0, 3, 4,  0, 4, 5, // right
    0, 5, 6,  0, 6, 1, // up
    1, 6, 7,  1, 7, 2, // left
    7, 4, 3,  7, 3, 2, // down
    4, 7, 6,  4, 6, 5, // back
];

/// Index count of one cube draw
pub const CUBE_INDEX_COUNT: u32 = CUBE_INDICES.len() as u32;
