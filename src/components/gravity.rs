use bevy_ecs::prelude::Component;

/// Downward acceleration added to `velocity.y` every physics step.
///
/// Collision resolution resets it to the configured baseline each frame and
/// zeroes it while the entity stands on a tile.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    pub gravity: f32,
}

impl Gravity {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}
