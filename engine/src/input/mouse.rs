//! Mouse Drag Tracker
//!
//! Tracks pointer drags for camera rotation. The pointer position is
//! recorded on every move; horizontal motion while the button is held
//! accumulates into a delta that the frame update consumes atomically,
//! so every pixel of drag turns the camera exactly once no matter how
//! event delivery interleaves with frames.

/// Drag state for pointer-driven camera rotation.
///
/// - **Position tracking**: the last pointer position is kept current
///   even outside a drag, so a press anchors where the pointer actually
///   is
/// - **Delta accumulation**: horizontal drag distance accumulates until
///   consumed
/// - **Atomic consumption**: `consume_drag_delta()` returns the
///   accumulated delta and resets it
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Whether a drag is in progress (button held).
    dragging: bool,
    /// Last observed pointer position, in screen coordinates.
    last_position: Option<(f64, f64)>,
    /// Accumulated horizontal drag since last consume.
    drag_delta_x: f32,
}

impl MouseState {
    /// Create a new mouse state with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag, anchored at the last observed pointer position.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End the current drag. Accumulated delta is kept until consumed.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Record pointer motion. While dragging, horizontal movement since
    /// the previous position accumulates into the drag delta. The
    /// position is tracked even outside a drag so a new drag never sees
    /// a stale anchor.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((last_x, _)) = self.last_position {
                self.drag_delta_x += (x - last_x) as f32;
            }
        }
        self.last_position = Some((x, y));
    }

    /// Consume the accumulated horizontal drag delta, resetting it to
    /// zero. Call once per frame from the camera update.
    #[inline]
    pub fn consume_drag_delta(&mut self) -> f32 {
        let delta = self.drag_delta_x;
        self.drag_delta_x = 0.0;
        delta
    }

    /// Whether a drag is currently in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current accumulated delta without consuming it.
    #[inline]
    pub fn peek_drag_delta(&self) -> f32 {
        self.drag_delta_x
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
