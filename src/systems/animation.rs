//! Animation system.
//!
//! Runs every frame, paused or not:
//!
//! - derives the player's [`PlayerState`] from its velocity and shoot intent
//!   and swaps in the matching animation when the state changes;
//! - destroys entities whose non-repeating animation reached its last frame;
//! - advances every animation by one frame.
//!
//! The last two steps are [`advance_animations`], a bevy system the scene runs
//! from its animation schedule.

use bevy_ecs::prelude::*;

use crate::components::animation::SpriteAnimation;
use crate::components::entityinfo::{Committed, EntityInfo};
use crate::components::input::PlayerInput;
use crate::components::state::{PlayerState, PlayerStateMachine};
use crate::components::transform::Transform;
use crate::scene::play::ScenePlay;

pub fn animation(scene: &mut ScenePlay) {
    update_player_state(scene);
    scene.entities.run_schedule(&mut scene.animation_stage);
}

pub fn advance_animations(
    mut query: Query<(&mut SpriteAnimation, &mut EntityInfo), With<Committed>>,
) {
    for (mut sprite, mut info) in query.iter_mut() {
        if sprite.animation.has_ended() && !sprite.repeat {
            log::trace!("entity #{} finished its one-shot animation", info.id);
            info.alive = false;
        }
        sprite.animation.update();
    }
}

fn update_player_state(scene: &mut ScenePlay) {
    let player = scene.player;
    let velocity = scene.entities.component::<Transform>(player).velocity;
    let shooting = {
        let mut input = scene.entities.component_mut::<PlayerInput>(player);
        if velocity.y != 0.0 {
            input.can_jump = false;
        }
        input.shoot
    };

    let next = PlayerState::from_motion(velocity.x, velocity.y, shooting);
    let changed = scene
        .entities
        .component_mut::<PlayerStateMachine>(player)
        .transition(next);
    if changed {
        log::trace!("player state -> {:?}", next);
        let animation = scene.animation(next.animation_name());
        *scene.entities.component_mut::<SpriteAnimation>(player) =
            SpriteAnimation::looping(animation);
    }
}
