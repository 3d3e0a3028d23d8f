use bevy_ecs::prelude::Component;

use crate::animation::Animation;

/// Sprite animation owned by an entity.
///
/// `repeat == false` marks a one-shot: the animation system destroys the
/// entity once its animation reports [`Animation::has_ended`].
#[derive(Debug, Clone, Component)]
pub struct SpriteAnimation {
    pub animation: Animation,
    pub repeat: bool,
}

impl SpriteAnimation {
    pub fn new(animation: Animation, repeat: bool) -> Self {
        Self { animation, repeat }
    }

    pub fn looping(animation: Animation) -> Self {
        Self::new(animation, true)
    }

    pub fn name(&self) -> &str {
        self.animation.name()
    }
}
