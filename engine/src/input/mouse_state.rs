//! Pointer state for mouse look
//!
//! Raw motion piles up between ticks while the pointer is captured and is
//! drained once per tick into the look delta. The primary button level
//! rides along because it triggers tool use.

use glam::Vec2;

/// Captured pointer with motion accumulation.
///
/// ```rust,ignore
/// let mut pointer = FpsMouseState::new();
/// pointer.set_captured(true);
///
/// // Several motion events arrive within one tick
/// pointer.accumulate_delta(6.0, -1.0);
/// pointer.accumulate_delta(2.0, 4.0);
///
/// assert_eq!(pointer.consume_delta(), Vec2::new(8.0, 3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Accumulated motion since last consume.
    delta: Vec2,
    /// Hidden and confined to the window
    captured: bool,
    /// Primary (left) button level.
    primary_down: bool,
}

impl FpsMouseState {
    /// Create a new state with zero delta and the cursor not captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw pointer motion.
    ///
    /// Motion received while the cursor is not captured is ignored, so that
    /// moving the free cursor over the window never turns the player.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.captured {
            self.delta += Vec2::new(dx, dy);
        }
    }

    /// Return the accumulated delta and reset it to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    /// Get the accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> Vec2 {
        self.delta
    }

    /// Capture or release the pointer. Releasing discards pending motion.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Record the primary button level.
    #[inline]
    pub fn set_primary_button(&mut self, down: bool) {
        self.primary_down = down;
    }

    /// Whether the primary button is held.
    #[inline]
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Back to released with no motion and the button up.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
