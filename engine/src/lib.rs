//! Overflight Engine Library
//!
//! Core library for the procedural terrain flyover. Generates octave-noise
//! heightmaps, bakes slope-shaded terrain textures, builds displaced plane
//! meshes, and provides the camera/input/render infrastructure the demo
//! binaries are built on.
//!
//! # Modules
//!
//! - [`terrain`] - Heightmap generation, texture baking, and mesh building
//! - [`camera`] - Free-look camera and the per-frame update function
//! - [`input`] - Platform-agnostic keyboard and mouse drag state
//! - [`render`] - wgpu rendering pipeline for the textured terrain mesh
//! - [`config`] - Scene configuration with JSON loading
//!
//! # Example
//!
//! ```ignore
//! use overflight_engine::config::SceneConfig;
//! use overflight_engine::terrain::{generate_heightmap, generate_texture, HeightmapConfig};
//!
//! let config = SceneConfig::default();
//! let grid = generate_heightmap(
//!     config.terrain.grid_width,
//!     config.terrain.grid_depth,
//!     0.75,
//!     &HeightmapConfig::default(),
//! )?;
//! let image = generate_texture(&grid);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod render;
pub mod terrain;

// Re-export commonly used types at crate level for convenience
pub use camera::{Camera, update_camera};
pub use config::{AtmosphereSettings, CameraSettings, SceneConfig, TerrainSettings};
pub use input::{InputState, KeyCode, KeyboardState, MouseState};
pub use render::{RenderConfig, RenderState, SceneUniforms};
pub use terrain::{
    HeightGrid, HeightmapConfig, ShadedImage, TerrainError, TerrainMesh, TerrainVertex,
    build_terrain_mesh, generate_heightmap, generate_heightmap_random, generate_texture,
};
