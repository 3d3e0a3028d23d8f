//! Keyboard to action bindings.
//!
//! [`ActionMap`] is the only place that knows about physical keys. The input
//! system walks the bindings each frame and turns key presses and releases
//! into [`ActionEvent`](crate::events::action::ActionEvent)s. Several keys may
//! map to the same action.
use raylib::prelude::KeyboardKey;

use crate::events::action::Action;

#[derive(Debug, Clone, Copy, PartialEq)]
/// A key bound to an action.
pub struct KeyBinding {
    pub key: KeyboardKey,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub struct ActionMap {
    bindings: Vec<KeyBinding>,
}

impl Default for ActionMap {
    /// P pauses, Escape quits, T/C/G toggle debug drawing, WASD moves and
    /// jumps, Space shoots.
    fn default() -> Self {
        Self::empty()
            .with(KeyboardKey::KEY_P, Action::Pause)
            .with(KeyboardKey::KEY_ESCAPE, Action::Quit)
            .with(KeyboardKey::KEY_T, Action::ToggleTexture)
            .with(KeyboardKey::KEY_C, Action::ToggleCollision)
            .with(KeyboardKey::KEY_G, Action::ToggleGrid)
            .with(KeyboardKey::KEY_W, Action::Jump)
            .with(KeyboardKey::KEY_S, Action::Down)
            .with(KeyboardKey::KEY_A, Action::Left)
            .with(KeyboardKey::KEY_D, Action::Right)
            .with(KeyboardKey::KEY_SPACE, Action::Shoot)
    }
}

impl ActionMap {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `key` to `action`, replacing an earlier binding of the same key.
    pub fn register(&mut self, key: KeyboardKey, action: Action) {
        match self.bindings.iter_mut().find(|b| b.key == key) {
            Some(binding) => binding.action = action,
            None => self.bindings.push(KeyBinding { key, action }),
        }
    }

    pub fn with(mut self, key: KeyboardKey, action: Action) -> Self {
        self.register(key, action);
        self
    }

    pub fn action_for(&self, key: KeyboardKey) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.action)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_bindings() {
        let map = ActionMap::default();
        assert_eq!(map.action_for(KeyboardKey::KEY_P), Some(Action::Pause));
        assert_eq!(map.action_for(KeyboardKey::KEY_ESCAPE), Some(Action::Quit));
        assert_eq!(map.action_for(KeyboardKey::KEY_T), Some(Action::ToggleTexture));
        assert_eq!(map.action_for(KeyboardKey::KEY_C), Some(Action::ToggleCollision));
        assert_eq!(map.action_for(KeyboardKey::KEY_G), Some(Action::ToggleGrid));
        assert_eq!(map.action_for(KeyboardKey::KEY_W), Some(Action::Jump));
        assert_eq!(map.action_for(KeyboardKey::KEY_S), Some(Action::Down));
        assert_eq!(map.action_for(KeyboardKey::KEY_A), Some(Action::Left));
        assert_eq!(map.action_for(KeyboardKey::KEY_D), Some(Action::Right));
        assert_eq!(map.action_for(KeyboardKey::KEY_SPACE), Some(Action::Shoot));
        assert_eq!(map.bindings().len(), 10);
    }

    #[test]
    fn test_unbound_key() {
        let map = ActionMap::default();
        assert_eq!(map.action_for(KeyboardKey::KEY_F12), None);
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut map = ActionMap::default();
        map.register(KeyboardKey::KEY_SPACE, Action::Jump);
        assert_eq!(map.action_for(KeyboardKey::KEY_SPACE), Some(Action::Jump));
        assert_eq!(map.bindings().len(), 10);
        map.register(KeyboardKey::KEY_UP, Action::Jump);
        assert_eq!(map.bindings().len(), 11);
    }
}
