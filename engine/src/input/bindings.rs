//! Key Bindings
//!
//! The controller only ever sees logical [`InputAction`]s. This table maps
//! physical keys onto them; every action has at most one key and every key
//! drives at most one action.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// What a key does for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    /// Level-triggered
    Sprint,
    Jump,
    /// Toggles stance on press
    Crouch,
    /// Pick up the aimed-at tool, or use the held one
    Interact,
    DropTool,
}

/// Default layout: WASD, Left Shift sprint, Space jump, Left Ctrl crouch,
/// E interact, Q drop.
const DEFAULT_LAYOUT: [(KeyCode, InputAction); 9] = [
    (KeyCode::W, InputAction::MoveForward),
    (KeyCode::S, InputAction::MoveBack),
    (KeyCode::A, InputAction::MoveLeft),
    (KeyCode::D, InputAction::MoveRight),
    (KeyCode::ShiftLeft, InputAction::Sprint),
    (KeyCode::Space, InputAction::Jump),
    (KeyCode::ControlLeft, InputAction::Crouch),
    (KeyCode::E, InputAction::Interact),
    (KeyCode::Q, InputAction::DropTool),
];

/// One-to-one key/action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    actions: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Table with the default layout.
    pub fn new() -> Self {
        Self {
            actions: DEFAULT_LAYOUT.into_iter().collect(),
        }
    }

    /// Table with nothing bound.
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Route `key` to `action`. The key's old action and the action's old
    /// key are both released.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.unbind_action(action);
        self.actions.insert(key, action);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.actions.remove(&key);
    }

    pub fn unbind_action(&mut self, action: InputAction) {
        self.actions.retain(|_, bound| *bound != action);
    }

    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.actions.get(&key).copied()
    }

    pub fn key_for(&self, action: InputAction) -> Option<KeyCode> {
        self.actions
            .iter()
            .find_map(|(key, bound)| (*bound == action).then_some(*key))
    }

    /// Whether the key bound to `action` is among `held`.
    pub fn is_action_held(&self, action: InputAction, held: &HashSet<KeyCode>) -> bool {
        held.iter().any(|key| self.action_for(*key) == Some(action))
    }

    /// -1, 0 or 1 from a pair of opposing actions.
    pub fn axis(&self, negative: InputAction, positive: InputAction, held: &HashSet<KeyCode>) -> f32 {
        let level = |action| if self.is_action_held(action, held) { 1.0 } else { 0.0 };
        level(positive) - level(negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[KeyCode]) -> HashSet<KeyCode> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_default_layout() {
        let bindings = KeyBindings::new();
        for (key, action) in DEFAULT_LAYOUT {
            assert_eq!(bindings.action_for(key), Some(action));
            assert_eq!(bindings.key_for(action), Some(key));
        }
        assert_eq!(bindings.action_for(KeyCode::F), None);
    }

    #[test]
    fn test_rebinding_moves_the_action() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::C, InputAction::Crouch);

        assert_eq!(bindings.action_for(KeyCode::ControlLeft), None);
        assert_eq!(bindings.key_for(InputAction::Crouch), Some(KeyCode::C));
        assert!(!bindings.is_action_held(InputAction::Crouch, &held(&[KeyCode::ControlLeft])));
        assert!(bindings.is_action_held(InputAction::Crouch, &held(&[KeyCode::C])));
    }

    #[test]
    fn test_rebinding_a_used_key_steals_it() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::E, InputAction::DropTool);

        assert_eq!(bindings.action_for(KeyCode::E), Some(InputAction::DropTool));
        assert_eq!(bindings.key_for(InputAction::Interact), None);
        assert_eq!(bindings.action_for(KeyCode::Q), None);
    }

    #[test]
    fn test_axis() {
        let bindings = KeyBindings::new();
        let forward = |keys: &[KeyCode]| {
            bindings.axis(InputAction::MoveBack, InputAction::MoveForward, &held(keys))
        };

        assert_eq!(forward(&[KeyCode::W]), 1.0);
        assert_eq!(forward(&[KeyCode::S]), -1.0);
        assert_eq!(forward(&[KeyCode::W, KeyCode::S]), 0.0);
        assert_eq!(forward(&[]), 0.0);
    }

    #[test]
    fn test_unbinding() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_action(InputAction::Sprint);
        bindings.unbind_key(KeyCode::W);

        assert!(!bindings.is_action_held(InputAction::Sprint, &held(&[KeyCode::ShiftLeft])));
        assert!(!bindings.is_action_held(InputAction::MoveForward, &held(&[KeyCode::W])));
        assert_eq!(KeyBindings::empty().key_for(InputAction::Jump), None);
    }
}
