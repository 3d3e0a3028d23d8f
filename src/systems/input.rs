//! Input system.
//!
//! Polls raylib for presses and releases of every bound key and reports them
//! as [`ActionEvent`]s, presses first. The scene never sees physical keys.

use raylib::prelude::RaylibHandle;

use crate::events::action::ActionEvent;
use crate::resources::input::ActionMap;

pub fn poll_actions(rl: &RaylibHandle, map: &ActionMap) -> Vec<ActionEvent> {
    let mut events = Vec::new();
    for binding in map.bindings() {
        if rl.is_key_pressed(binding.key) {
            events.push(ActionEvent::start(binding.action));
        }
    }
    for binding in map.bindings() {
        if rl.is_key_released(binding.key) {
            events.push(ActionEvent::end(binding.action));
        }
    }
    events
}
