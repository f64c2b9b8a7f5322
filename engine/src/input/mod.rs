//! Input Module
//!
//! Platform-agnostic input handling for keyboard and mouse. Decoupled
//! from the windowing system so the camera update can be driven (and
//! tested) without a live event loop.
//!
//! # Example
//!
//! ```rust,ignore
//! use overflight_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // From event handlers:
//! input.keyboard.handle_key(KeyCode::ArrowUp, true);
//! input.mouse.begin_drag();
//! input.mouse.move_to(140.0, 80.0);
//!
//! // Once per frame:
//! let dx = input.mouse.consume_drag_delta();
//! ```

pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse::MouseState;

/// Combined input state for both keyboard and mouse.
///
/// Written by the window event handlers, read once per rendered frame by
/// the camera update. Everything runs on the event-loop thread; the last
/// value written before a frame is the one that frame sees.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl InputState {
    /// Create a new input state with all inputs released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }

    /// Check if any movement input is active (held keys or a drag).
    pub fn is_active(&self) -> bool {
        self.keyboard.movement.any_pressed() || self.mouse.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_default() {
        let input = InputState::new();
        assert!(!input.is_active());
    }

    #[test]
    fn test_input_state_keyboard_movement() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::ArrowLeft, true);
        assert!(input.is_active());
    }

    #[test]
    fn test_input_state_mouse_drag() {
        let mut input = InputState::new();
        input.mouse.begin_drag();
        assert!(input.is_active());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::ArrowUp, true);
        input.mouse.begin_drag();
        input.reset();
        assert!(!input.is_active());
    }
}
