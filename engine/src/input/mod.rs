//! Input Module
//!
//! Platform-agnostic input handling for the player core. The host feeds key
//! and pointer events into an [`InputState`]; once per tick it takes an
//! [`InputSnapshot`] through the [`KeyBindings`] and hands it to an
//! [`InputTracker`], which derives the edge-triggered [`TickInput`] the
//! controller consumes.
//!
//! # Example
//!
//! ```rust,ignore
//! use first_person_engine::input::{InputState, InputTracker, KeyBindings, KeyCode};
//!
//! let bindings = KeyBindings::new();
//! let mut input = InputState::new();
//! let mut tracker = InputTracker::new();
//!
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.mouse.set_captured(true);
//! input.mouse.accumulate_delta(4.0, -1.0);
//!
//! let tick_input = tracker.advance(input.snapshot(&bindings));
//! controller.tick(dt, &tick_input, &world);
//! ```

pub mod bindings;
pub mod edge;
pub mod keyboard;
pub mod mouse_state;

pub use bindings::{InputAction, KeyBindings};
pub use edge::{Button, ButtonSet, ButtonState, InputSnapshot, InputTracker, TickInput};
pub use keyboard::{KeyCode, KeyboardState};
pub use mouse_state::FpsMouseState;

use glam::Vec2;

/// Combined keyboard and pointer state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: FpsMouseState,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }

    /// Build this tick's snapshot, consuming the accumulated pointer delta.
    ///
    /// Pointer y is flipped so that moving the pointer up is positive.
    pub fn snapshot(&mut self, bindings: &KeyBindings) -> InputSnapshot {
        let held = self.keyboard.held_keys();
        let move_axes = Vec2::new(
            bindings.axis(InputAction::MoveLeft, InputAction::MoveRight, held),
            bindings.axis(InputAction::MoveBack, InputAction::MoveForward, held),
        );

        let mut buttons = ButtonSet::empty();
        buttons.set(Button::Jump, bindings.is_action_held(InputAction::Jump, held));
        buttons.set(Button::Crouch, bindings.is_action_held(InputAction::Crouch, held));
        buttons.set(Button::Sprint, bindings.is_action_held(InputAction::Sprint, held));
        buttons.set(Button::Interact, bindings.is_action_held(InputAction::Interact, held));
        buttons.set(Button::DropTool, bindings.is_action_held(InputAction::DropTool, held));
        buttons.set(Button::UseTool, self.mouse.is_primary_down());

        let pointer = self.mouse.consume_delta();
        InputSnapshot::new(move_axes, Vec2::new(pointer.x, -pointer.y), buttons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_default() {
        let mut input = InputState::new();
        let snapshot = input.snapshot(&KeyBindings::new());
        assert_eq!(snapshot, InputSnapshot::default());
    }

    #[test]
    fn test_snapshot_movement_and_buttons() {
        let bindings = KeyBindings::new();
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::W, true);
        input.keyboard.handle_key(KeyCode::D, true);
        input.keyboard.handle_key(KeyCode::ShiftLeft, true);
        input.mouse.set_primary_button(true);

        let snapshot = input.snapshot(&bindings);
        assert_eq!(snapshot.move_axes, Vec2::new(1.0, 1.0));
        assert!(snapshot.buttons.contains(Button::Sprint));
        assert!(snapshot.buttons.contains(Button::UseTool));
        assert!(!snapshot.buttons.contains(Button::Jump));
    }

    #[test]
    fn test_snapshot_consumes_pointer_delta() {
        let bindings = KeyBindings::new();
        let mut input = InputState::new();
        input.mouse.set_captured(true);
        input.mouse.accumulate_delta(4.0, 2.0);

        // Device y grows downward; snapshot y grows upward
        assert_eq!(input.snapshot(&bindings).look_delta, Vec2::new(4.0, -2.0));
        assert_eq!(input.snapshot(&bindings).look_delta, Vec2::ZERO);
    }
}
