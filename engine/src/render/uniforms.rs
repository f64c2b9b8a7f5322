//! Scene Uniforms
//!
//! The per-frame uniform block shared by the terrain shader. Field order
//! and padding mirror the WGSL struct in `terrain.wgsl`; the size
//! assertion guards the layout.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Uniform data uploaded once per frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub time: f32,
    pub sun_dir: [f32; 3],
    pub fog_density: f32,
    pub sky_color: [f32; 3],
    pub ambient: f32,
}

static_assertions::assert_eq_size!(SceneUniforms, [u8; 112]);

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 0.0],
            time: 0.0,
            sun_dir: Vec3::new(100.0, 500.0, -100.0).normalize().into(),
            fog_density: 0.0008,
            sky_color: [0.529, 0.808, 0.922],
            ambient: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sun_is_normalized() {
        let uniforms = SceneUniforms::default();
        let len = Vec3::from(uniforms.sun_dir).length();
        assert!((len - 1.0).abs() < 1e-5);
    }
}
