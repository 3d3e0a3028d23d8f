//! World-space placement and motion of an entity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position (sprite centre), last frame's position, velocity in pixels per
/// frame, non-uniform scale and rotation in degrees.
///
/// `prev_pos` is written by the movement system exactly once per physics step,
/// right before velocity is integrated. Collision code reads it to tell a
/// fresh contact from one that already existed last frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub pos: Vector2,
    pub prev_pos: Vector2,
    pub velocity: Vector2,
    pub scale: Vector2,
    pub angle: f32,
}

impl Transform {
    pub fn new(pos: Vector2, velocity: Vector2, scale: Vector2, angle: f32) -> Self {
        Self {
            pos,
            prev_pos: pos,
            velocity,
            scale,
            angle,
        }
    }

    /// Stationary, unscaled transform at `pos`.
    pub fn at(pos: Vector2) -> Self {
        Self::new(pos, Vector2::zero(), Vector2::new(1.0, 1.0), 0.0)
    }

    /// Record the current position and move by one frame of velocity.
    pub fn integrate(&mut self) {
        self.prev_pos = self.pos;
        self.pos += self.velocity;
    }
}
