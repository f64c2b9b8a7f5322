//! Camera Update
//!
//! The single deterministic state-update step applied once per frame:
//! consume accumulated mouse drag, then translate along the camera axes
//! from the held directional keys. Runs without any window or GPU, so
//! camera behavior is testable in isolation.

use super::Camera;
use crate::input::InputState;

/// Advance the camera by one frame of input.
///
/// Drag delta is consumed atomically, so motion is applied exactly once
/// no matter how many pointer events arrived since the last frame. Key
/// translation scales with `dt`, making movement speed frame-rate
/// independent.
pub fn update_camera(camera: &mut Camera, input: &mut InputState, dt: f32) {
    let drag_x = input.mouse.consume_drag_delta();
    if drag_x != 0.0 {
        camera.apply_drag(drag_x);
    }

    let forward_axis = input.keyboard.movement.forward_axis() as f32;
    let right_axis = input.keyboard.movement.right_axis() as f32;
    if forward_axis == 0.0 && right_axis == 0.0 {
        return;
    }

    let step = camera.move_speed * dt;
    let forward = camera.forward();
    let right = camera.right();
    camera.position += forward * (forward_axis * step) + right * (right_axis * step);
}
