//! Terrain Mesh Builder
//!
//! Turns a heightmap into a displaced plane mesh: a regular grid of
//! vertices centered on the origin in the XZ plane, with each vertex
//! lifted by its elevation sample. Normals come from central height
//! differences and UVs span the grid so the baked texture maps one
//! texel per cell.

use glam::Vec3;

use super::heightmap::HeightGrid;
use crate::config::TerrainSettings;

/// Vertex for the terrain mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 32]);

/// Generated terrain mesh data, ready for GPU upload.
pub struct TerrainMesh {
    pub vertices: Vec<TerrainVertex>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Number of indices to draw.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Build the displaced plane mesh for a heightmap.
///
/// The plane spans `world_size` on both axes, one vertex per grid sample,
/// vertex Y = `sample * height_scale + y_offset`. Two counter-clockwise
/// triangles per cell.
pub fn build_terrain_mesh(grid: &HeightGrid, settings: &TerrainSettings) -> TerrainMesh {
    let width = grid.width();
    let depth = grid.depth();
    let spacing = settings.world_size / (width.max(2) - 1) as f32;
    let half = settings.world_size / 2.0;

    let mut vertices = Vec::with_capacity(width * depth);
    for y in 0..depth {
        for x in 0..width {
            let height = grid.get(x, y) as f32 * settings.height_scale + settings.y_offset;
            let (xi, yi) = (x as isize, y as isize);

            // Central difference in world units; the clamped border read
            // flattens the normal at the edge rather than folding it over.
            let dhx = (grid.sample_clamped(xi - 1, yi) as f32
                - grid.sample_clamped(xi + 1, yi) as f32)
                * settings.height_scale;
            let dhz = (grid.sample_clamped(xi, yi - 1) as f32
                - grid.sample_clamped(xi, yi + 1) as f32)
                * settings.height_scale;
            let normal = Vec3::new(dhx, 2.0 * spacing, dhz).normalize();

            vertices.push(TerrainVertex {
                position: [
                    x as f32 * spacing - half,
                    height,
                    y as f32 * spacing - half,
                ],
                normal: normal.into(),
                uv: [
                    x as f32 / (width.max(2) - 1) as f32,
                    y as f32 / (depth.max(2) - 1) as f32,
                ],
            });
        }
    }

    let mut indices = Vec::with_capacity(width.saturating_sub(1) * depth.saturating_sub(1) * 6);
    for y in 0..depth.saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let i0 = (y * width + x) as u32;
            let i1 = i0 + 1;
            let i2 = i0 + width as u32;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    TerrainMesh { vertices, indices }
}
