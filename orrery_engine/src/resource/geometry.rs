//! Resource-level geometry types.
//!
//! A `Geometry` is a single non-indexed triangle list stored in one GPU
//! buffer, split in three consecutive sections:
//!
//! ```text
//! [ positions: 3 x f32 x N ][ normals: 3 x f32 x N ][ uvs: 2 x f32 x N ]
//! ```
//!
//! Every body of the scene shares the same sphere geometry.

use std::f32::consts::PI;
use std::sync::Arc;
use crate::error::Result;
use crate::engine_bail;
use crate::renderer::{Buffer, BufferDesc, PrimitiveTopology, Renderer};

const FLOAT_SIZE: u64 = std::mem::size_of::<f32>() as u64;

// ============================================================================
// SECTION LAYOUT
// ============================================================================

/// Byte offsets of the three vertex streams inside the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub position_offset: u64,
    pub normal_offset: u64,
    pub uv_offset: u64,
}

impl SectionLayout {
    pub const POSITION_COMPONENTS: u32 = 3;
    pub const NORMAL_COMPONENTS: u32 = 3;
    pub const UV_COMPONENTS: u32 = 2;

    /// Layout of a buffer holding `vertex_count` vertices
    pub fn for_vertex_count(vertex_count: u32) -> Self {
        let n = vertex_count as u64;
        Self {
            position_offset: 0,
            normal_offset: n * 3 * FLOAT_SIZE,
            uv_offset: n * 6 * FLOAT_SIZE,
        }
    }

    /// Total buffer size needed for `vertex_count` vertices
    pub fn total_size(vertex_count: u32) -> u64 {
        vertex_count as u64 * 8 * FLOAT_SIZE
    }
}

// ============================================================================
// SPHERE MESH (CPU side)
// ============================================================================

/// Unit UV sphere expanded into a non-indexed triangle list
#[derive(Debug, Clone)]
pub struct SphereMesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
}

impl SphereMesh {
    /// Tessellate a unit sphere.
    ///
    /// # Arguments
    ///
    /// * `slices` - Subdivisions around the Y axis (clamped to >= 3)
    /// * `stacks` - Subdivisions from pole to pole (clamped to >= 2)
    pub fn generate(slices: u32, stacks: u32) -> Self {
        let slices = slices.max(3);
        let stacks = stacks.max(2);

        // Shared grid of (slices + 1) x (stacks + 1) points, duplicated seam
        let grid_point = |slice: u32, stack: u32| -> ([f32; 3], [f32; 2]) {
            let u = slice as f32 / slices as f32;
            let v = stack as f32 / stacks as f32;
            let theta = v * PI;
            let phi = u * 2.0 * PI;
            let ring = theta.sin();
            let position = [-ring * phi.cos(), -theta.cos(), ring * phi.sin()];
            (position, [u, 1.0 - v])
        };

        let vertex_count = (slices * stacks * 6) as usize;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);

        for stack in 0..stacks {
            for slice in 0..slices {
                let p00 = grid_point(slice, stack);
                let p10 = grid_point(slice + 1, stack);
                let p01 = grid_point(slice, stack + 1);
                let p11 = grid_point(slice + 1, stack + 1);

                for (position, uv) in [p00, p10, p01, p10, p11, p01] {
                    positions.push(position);
                    uvs.push(uv);
                }
            }
        }

        // Unit sphere: the normal is the position
        let normals = positions.clone();

        Self { positions, normals, uvs }
    }

    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Serialize in section order: positions, normals, uvs
    pub fn to_section_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SectionLayout::total_size(self.vertex_count()) as usize);
        bytes.extend_from_slice(bytemuck::cast_slice(&self.positions));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.normals));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.uvs));
        bytes
    }
}

// ============================================================================
// GEOMETRY (GPU side)
// ============================================================================

/// Mesh descriptor referenced by scene nodes: buffer handle, vertex count
/// and stream offsets
pub struct Geometry {
    name: String,
    vertex_count: u32,
    buffer: Arc<dyn Buffer>,
    layout: SectionLayout,
}

impl Geometry {
    /// Wrap an already uploaded buffer
    ///
    /// # Errors
    ///
    /// Fails if the vertex count is not a whole number of triangles or the
    /// buffer is too small for the section layout.
    pub fn from_buffer(name: &str, vertex_count: u32, buffer: Arc<dyn Buffer>) -> Result<Self> {
        if vertex_count == 0 || vertex_count % 3 != 0 {
            engine_bail!("orrery::Geometry",
                "Geometry '{}': vertex count {} is not a non-empty triangle list",
                name, vertex_count);
        }
        let required = SectionLayout::total_size(vertex_count);
        if buffer.size() < required {
            engine_bail!("orrery::Geometry",
                "Geometry '{}': buffer holds {} bytes, {} vertices need {}",
                name, buffer.size(), vertex_count, required);
        }
        Ok(Self {
            name: name.to_string(),
            vertex_count,
            buffer,
            layout: SectionLayout::for_vertex_count(vertex_count),
        })
    }

    /// Upload a sphere mesh into a new vertex buffer
    pub fn upload_sphere(
        renderer: &mut dyn Renderer,
        name: &str,
        mesh: &SphereMesh,
    ) -> Result<Self> {
        let buffer = renderer.create_buffer(BufferDesc {
            name: format!("{}_vertices", name),
            data: mesh.to_section_bytes(),
        })?;
        Self::from_buffer(name, mesh.vertex_count(), buffer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn buffer(&self) -> &Arc<dyn Buffer> {
        &self.buffer
    }

    pub fn layout(&self) -> SectionLayout {
        self.layout
    }

    /// Always a triangle list
    pub fn topology(&self) -> PrimitiveTopology {
        PrimitiveTopology::TriangleList
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
