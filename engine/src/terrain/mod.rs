//! Terrain Module
//!
//! Procedural terrain generation: octave-summed noise heightmaps, the
//! slope-shaded texture bake, and displaced plane mesh construction.
//!
//! The pipeline runs once at scene setup:
//!
//! ```text
//! generate_heightmap -> HeightGrid -> generate_texture -> ShadedImage
//!                                  \-> build_terrain_mesh -> TerrainMesh
//! ```

pub mod heightmap;
pub mod mesh;
pub mod texture;

// Re-export commonly used types at module level
pub use heightmap::{
    HeightGrid, HeightmapConfig, TerrainError, generate_heightmap, generate_heightmap_random,
};
pub use mesh::{TerrainMesh, TerrainVertex, build_terrain_mesh};
pub use texture::{ShadedImage, generate_texture};
