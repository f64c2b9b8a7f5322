//! Keyboard Input Module
//!
//! Tracks the held state of the directional movement keys. Uses generic
//! key codes rather than winit's so the state machine has no windowing
//! dependency.

/// Generic key codes for the keys the flyover responds to, independent
/// of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    R,
    Escape,
    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which directional keys are currently held.
///
/// Held keys produce continuous motion: the camera update reads the axis
/// values every frame until the key is released.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// ArrowUp - fly forward
    pub forward: bool,
    /// ArrowDown - fly backward
    pub backward: bool,
    /// ArrowLeft - strafe left
    pub left: bool,
    /// ArrowRight - strafe right
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// Complete keyboard state tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed)
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        self.movement.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_movement_keys_forward() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::ArrowUp, true));
        assert!(keys.forward);
        assert!(keys.any_pressed());
        assert_eq!(keys.forward_axis(), 1);
    }

    #[test]
    fn test_release_clears_key() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ArrowRight, true);
        assert_eq!(keys.right_axis(), 1);
        keys.handle_key(KeyCode::ArrowRight, false);
        assert_eq!(keys.right_axis(), 0);
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ArrowUp, true);
        keys.handle_key(KeyCode::ArrowDown, true);
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::ArrowLeft, true);
        assert_eq!(keys.right_axis(), -1);
    }

    #[test]
    fn test_non_movement_key() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Escape, true));
        assert!(!keys.handle_key(KeyCode::R, true));
        assert!(!keys.any_pressed());
    }
}
