//! Camera Module
//!
//! Free-look camera for flying over the terrain, plus the single
//! per-frame update function that applies input state to it.

pub mod controller;

pub use controller::update_camera;

use glam::{Mat4, Vec3};

/// Free-look camera with yaw/pitch orientation.
///
/// Mouse drag yaws the camera about the vertical axis; the directional
/// keys translate it along its forward and right vectors. Owned by the
/// app and mutated only through [`update_camera`].
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    /// Horizontal angle (radians).
    pub yaw: f32,
    /// Vertical angle (radians).
    pub pitch: f32,
    /// Translation speed in world units per second.
    pub move_speed: f32,
    /// Yaw radians per pixel of horizontal drag.
    pub drag_sensitivity: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            // High and back, pitched down toward the terrain center.
            position: Vec3::new(1000.0, 800.0, -800.0),
            yaw: -2.246,
            pitch: -0.372,
            move_speed: 1200.0,
            drag_sensitivity: 0.002,
            fov: 60.0_f32.to_radians(),
            near: 1.0,
            far: 20000.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Unit vector to the camera's right, parallel to the ground plane.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.forward();
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Rotate about the vertical axis by a horizontal drag delta, in
    /// pixels. Dragging right turns the view right.
    pub fn apply_drag(&mut self, delta_x: f32) {
        self.yaw -= delta_x * self.drag_sensitivity;
    }

    /// Restore the default pose, keeping the speed/lens parameters.
    pub fn reset(&mut self) {
        let defaults = Camera::default();
        self.position = defaults.position;
        self.yaw = defaults.yaw;
        self.pitch = defaults.pitch;
    }
}
