//! Render Module
//!
//! wgpu-based rendering for the terrain scene: GPU bring-up, the
//! textured-mesh pipeline, uniform management, and terrain texture
//! upload. The render state owns every GPU resource; binaries drive it
//! with a camera and the baked terrain data.

pub mod pipeline;
pub mod terrain_texture;
pub mod uniforms;

// Re-export commonly used types for convenience
pub use pipeline::{RenderConfig, RenderState};
pub use terrain_texture::TerrainTexture;
pub use uniforms::SceneUniforms;
