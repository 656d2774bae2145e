//! Input Edge Detection
//!
//! The host reports *levels* (which buttons are down right now). The player
//! core needs *edges* for jump, crouch toggle and interaction, and a level for
//! sprint. [`InputTracker`] keeps the previous [`InputSnapshot`] and derives a
//! [`TickInput`] for each tick, so edges are deterministic and never depend on
//! when the host polled its devices.

use glam::Vec2;

/// Logical buttons consumed by the player core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Jump,
    Crouch,
    Sprint,
    UseTool,
    Interact,
    DropTool,
}

impl Button {
    const fn bit(self) -> u8 {
        match self {
            Button::Jump => 1 << 0,
            Button::Crouch => 1 << 1,
            Button::Sprint => 1 << 2,
            Button::UseTool => 1 << 3,
            Button::Interact => 1 << 4,
            Button::DropTool => 1 << 5,
        }
    }
}

/// Set of held buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet(u8);

impl ButtonSet {
    /// No buttons held.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builder-style insert.
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    /// Set or clear a button.
    pub fn set(&mut self, button: Button, held: bool) {
        if held {
            self.0 |= button.bit();
        } else {
            self.0 &= !button.bit();
        }
    }

    /// Whether a button is held.
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }
}

/// Transition of one button between two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Up in both snapshots
    Idle,
    /// Went down this tick
    Pressed,
    /// Down in both snapshots
    Held,
    /// Went up this tick
    Released,
}

impl ButtonState {
    /// Derive the transition from the previous and current levels.
    pub const fn from_levels(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, false) => ButtonState::Idle,
            (false, true) => ButtonState::Pressed,
            (true, true) => ButtonState::Held,
            (true, false) => ButtonState::Released,
        }
    }

    /// Down this tick (pressed or held).
    pub const fn is_down(self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Held)
    }

    /// Went down this tick.
    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonState::Pressed)
    }
}

/// Level state of the player's inputs for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// x = strafe (right positive), y = forward (forward positive)
    pub move_axes: Vec2,
    /// Pointer motion this tick, x right, y up
    pub look_delta: Vec2,
    /// Buttons held this tick
    pub buttons: ButtonSet,
}

impl InputSnapshot {
    /// Snapshot with axes clamped to [-1, 1].
    pub fn new(move_axes: Vec2, look_delta: Vec2, buttons: ButtonSet) -> Self {
        Self {
            move_axes: move_axes.clamp(Vec2::NEG_ONE, Vec2::ONE),
            look_delta,
            buttons,
        }
    }
}

/// Per-tick input consumed by the player controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// x = strafe, y = forward, each in [-1, 1]
    pub move_axes: Vec2,
    /// Pointer motion this tick
    pub look_delta: Vec2,
    pub jump_pressed: bool,
    pub crouch_pressed: bool,
    pub sprint_held: bool,
    pub use_tool_pressed: bool,
    pub interact_pressed: bool,
    pub drop_pressed: bool,
}

/// Derives [`TickInput`]s from consecutive snapshots.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: InputSnapshot,
}

impl InputTracker {
    /// Create a tracker that assumes nothing was held before the first tick.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition of a button between the last two snapshots given `current`.
    pub fn state_of(&self, current: &InputSnapshot, button: Button) -> ButtonState {
        ButtonState::from_levels(
            self.previous.buttons.contains(button),
            current.buttons.contains(button),
        )
    }

    /// Diff `current` against the previous snapshot and remember it.
    pub fn advance(&mut self, current: InputSnapshot) -> TickInput {
        let pressed = |button| self.state_of(&current, button).is_pressed();
        let input = TickInput {
            move_axes: current.move_axes.clamp(Vec2::NEG_ONE, Vec2::ONE),
            look_delta: current.look_delta,
            jump_pressed: pressed(Button::Jump),
            crouch_pressed: pressed(Button::Crouch),
            sprint_held: current.buttons.contains(Button::Sprint),
            use_tool_pressed: pressed(Button::UseTool),
            interact_pressed: pressed(Button::Interact),
            drop_pressed: pressed(Button::DropTool),
        };
        self.previous = current;
        input
    }

    /// Forget the previous snapshot (e.g. after focus loss), so a button
    /// still held on return counts as a fresh press.
    pub fn reset(&mut self) {
        self.previous = InputSnapshot::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(buttons: ButtonSet) -> InputSnapshot {
        InputSnapshot::new(Vec2::ZERO, Vec2::ZERO, buttons)
    }

    #[test]
    fn test_button_state_from_levels() {
        assert_eq!(ButtonState::from_levels(false, false), ButtonState::Idle);
        assert_eq!(ButtonState::from_levels(false, true), ButtonState::Pressed);
        assert_eq!(ButtonState::from_levels(true, true), ButtonState::Held);
        assert_eq!(ButtonState::from_levels(true, false), ButtonState::Released);
        assert!(ButtonState::Held.is_down());
        assert!(!ButtonState::Released.is_down());
    }

    #[test]
    fn test_button_set() {
        let mut set = ButtonSet::empty().with(Button::Jump).with(Button::Sprint);
        assert!(set.contains(Button::Jump));
        assert!(set.contains(Button::Sprint));
        assert!(!set.contains(Button::Crouch));

        set.set(Button::Jump, false);
        assert!(!set.contains(Button::Jump));
    }

    #[test]
    fn test_jump_edge_only_on_first_tick() {
        let mut tracker = InputTracker::new();
        let held = snapshot(ButtonSet::empty().with(Button::Jump));

        assert!(tracker.advance(held).jump_pressed);
        assert!(!tracker.advance(held).jump_pressed);
        assert!(!tracker.advance(snapshot(ButtonSet::empty())).jump_pressed);
        assert!(tracker.advance(held).jump_pressed);
    }

    #[test]
    fn test_sprint_is_level() {
        let mut tracker = InputTracker::new();
        let held = snapshot(ButtonSet::empty().with(Button::Sprint));

        assert!(tracker.advance(held).sprint_held);
        assert!(tracker.advance(held).sprint_held);
    }

    #[test]
    fn test_axes_clamped() {
        let mut tracker = InputTracker::new();
        let input = tracker.advance(InputSnapshot {
            move_axes: Vec2::new(3.0, -2.0),
            look_delta: Vec2::new(5.0, 1.0),
            buttons: ButtonSet::empty(),
        });
        assert_eq!(input.move_axes, Vec2::new(1.0, -1.0));
        assert_eq!(input.look_delta, Vec2::new(5.0, 1.0));
    }

    #[test]
    fn test_reset_rearms_edges() {
        let mut tracker = InputTracker::new();
        let held = snapshot(ButtonSet::empty().with(Button::Crouch));

        assert!(tracker.advance(held).crouch_pressed);
        tracker.reset();
        assert!(tracker.advance(held).crouch_pressed);
    }
}
