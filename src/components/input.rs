//! Player intent component.
//!
//! Action handling in [`ScenePlay`](crate::scene::play::ScenePlay) writes the
//! intent flags; the movement system reads them. The permission flags are
//! derived state: `can_jump` is cleared when a jump starts or the player is
//! airborne and only restored by a landing collision.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    /// Jump held.
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
    pub can_jump: bool,
    pub can_shoot: bool,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self {
            left: false,
            right: false,
            up: false,
            down: false,
            shoot: false,
            can_jump: true,
            can_shoot: true,
        }
    }
}
