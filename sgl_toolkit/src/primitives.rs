/// Constant meshes for common passes
///
/// Flat `f32`/`u32` arrays ready for vertex/index buffer upload. The
/// `*_bytes()` helpers give the `&[u8]` view expected by GL buffer calls.

use bytemuck::Pod;

// ===== UNIT BOX =====

/// Floats per unit box vertex (position)
pub const UNIT_BOX_STRIDE: usize = 3;

/// Unit box for environment maps; positions double as cube-map coordinates
pub static UNIT_BOX_VERTICES: [f32; 24] = [
    -1.0, -1.0, -1.0,
     1.0, -1.0, -1.0,
     1.0, -1.0,  1.0,
    -1.0, -1.0,  1.0,
    -1.0,  1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0,  1.0,  1.0,
    -1.0,  1.0,  1.0,
];

/// Two triangles per face, bottom face first
pub static UNIT_BOX_INDICES: [u32; 36] = [
    0, 1, 2,
    0, 2, 3,

    0, 1, 5,
    0, 5, 4,

    1, 2, 6,
    1, 6, 5,

    2, 3, 7,
    2, 7, 6,

    3, 0, 4,
    3, 4, 7,

    4, 5, 6,
    4, 6, 7,
];

// ===== FRAMEBUFFER QUAD =====

/// Floats per quad vertex (xy position, uv)
pub const FRAMEBUFFER_QUAD_STRIDE: usize = 4;

/// Full-screen quad in normalized device coordinates, drawn as 6 vertices
/// without indices
pub static FRAMEBUFFER_QUAD: [f32; 24] = [
    // positions  // uv
    -1.0,  1.0,   0.0, 1.0,
    -1.0, -1.0,   0.0, 0.0,
     1.0, -1.0,   1.0, 0.0,

    -1.0,  1.0,   0.0, 1.0,
     1.0, -1.0,   1.0, 0.0,
     1.0,  1.0,   1.0, 1.0,
];

// ===== UNIT PLANE =====

/// Floats per plane vertex (position 3, uv 2, normal 3, tangent 3, bitangent 3)
pub const UNIT_PLANE_STRIDE: usize = 14;

/// 1x1 plane on XZ facing +Y, usable as a terrain patch
pub static UNIT_PLANE_VERTICES: [f32; 56] = [
    // position       // uv      // normal       // tangent      // bitangent
    0.0, 0.0, 0.0,    0.0, 0.0,  0.0, 1.0, 0.0,  1.0, 0.0, 0.0,  0.0, 0.0, -1.0,
    1.0, 0.0, 0.0,    1.0, 0.0,  0.0, 1.0, 0.0,  1.0, 0.0, 0.0,  0.0, 0.0, -1.0,
    1.0, 0.0, 1.0,    1.0, 1.0,  0.0, 1.0, 0.0,  1.0, 0.0, 0.0,  0.0, 0.0, -1.0,
    0.0, 0.0, 1.0,    0.0, 1.0,  0.0, 1.0, 0.0,  1.0, 0.0, 0.0,  0.0, 0.0, -1.0,
];

pub static UNIT_PLANE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

// ===== BYTE VIEWS =====

/// Reinterpret any plain-data slice as bytes
pub fn as_bytes<T: Pod>(data: &[T]) -> &[u8] {
    bytemuck::cast_slice(data)
}

pub fn unit_box_vertex_bytes() -> &'static [u8] {
    as_bytes(&UNIT_BOX_VERTICES)
}

pub fn unit_box_index_bytes() -> &'static [u8] {
    as_bytes(&UNIT_BOX_INDICES)
}

pub fn framebuffer_quad_bytes() -> &'static [u8] {
    as_bytes(&FRAMEBUFFER_QUAD)
}

pub fn unit_plane_vertex_bytes() -> &'static [u8] {
    as_bytes(&UNIT_PLANE_VERTICES)
}

pub fn unit_plane_index_bytes() -> &'static [u8] {
    as_bytes(&UNIT_PLANE_INDICES)
}

#[cfg(test)]
#[path = "primitives_tests.rs"]
mod tests;
