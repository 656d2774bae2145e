//! Keyboard Input Module
//!
//! Tracks which keys are held. Decoupled from any windowing system: the host
//! translates its own key events into [`KeyCode`]s.

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Interaction keys
    E,
    Q,
    F,
    C,

    // Control keys
    Escape,
    Enter,
    Tab,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Complete keyboard state tracking.
///
/// Keeps the set of keys currently held down. Edges (pressed this tick,
/// released this tick) are derived later by comparing snapshots, see
/// [`InputTracker`](super::InputTracker).
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the held state of the key changed. Key repeat events
    /// (pressed while already held) return `false`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key)
        }
    }

    /// Check if a key is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// The set of held keys.
    pub fn held_keys(&self) -> &HashSet<KeyCode> {
        &self.held
    }

    /// Check if any key is held.
    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    /// Release every key (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
