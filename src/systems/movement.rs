//! Movement system.
//!
//! Turns the player's intents into velocity, fires the weapon, then applies
//! gravity and integrates every entity:
//!
//! 1. horizontal velocity is rebuilt from left/right each frame and the
//!    sprite is flipped to face the direction of travel;
//! 2. a held jump starts a jump only while `can_jump`; releasing it while
//!    rising cuts the jump short;
//! 3. a held shoot fires on every [`FIRE_INTERVAL`]th frame;
//! 4. entities with [`Gravity`] accelerate downward up to the player's max
//!    fall speed;
//! 5. `prev_pos` is recorded and velocity added to position.

use crate::components::gravity::Gravity;
use crate::components::input::PlayerInput;
use crate::components::transform::Transform;
use crate::scene::play::{FIRE_INTERVAL, ScenePlay};
use crate::scene::spawn::spawn_bullet;

/// Horizontal sprite scale when moving; the sign picks the facing.
const FACING_SCALE: f32 = 2.0;

pub fn movement(scene: &mut ScenePlay) {
    let player = scene.player;
    let speed = scene.player_config.speed;
    let jump = scene.player_config.jump;
    let max_speed = scene.player_config.max_speed;
    let frame = scene.current_frame;

    let mut input = *scene.entities.component::<PlayerInput>(player);
    let mut fire = false;
    {
        let mut transform = scene.entities.component_mut::<Transform>(player);
        transform.velocity.x = 0.0;
        if input.left {
            transform.velocity.x = -speed;
            transform.scale.x = FACING_SCALE;
        } else if input.right {
            transform.velocity.x = speed;
            transform.scale.x = -FACING_SCALE;
        }

        if input.up {
            if input.can_jump {
                input.can_jump = false;
                transform.velocity.y = jump;
            }
        } else if transform.velocity.y <= 0.0 {
            transform.velocity.y = 0.0;
        }
    }

    if input.shoot {
        input.can_shoot = false;
        if frame % FIRE_INTERVAL == 0 {
            input.can_shoot = true;
            fire = true;
        }
    }
    *scene.entities.component_mut::<PlayerInput>(player) = input;

    if fire {
        spawn_bullet(scene, player);
    }

    let entities = scene.entities.entities().to_vec();
    for entity in entities {
        let gravity = scene.entities.get::<Gravity>(entity).map(|g| g.gravity);
        let Some(mut transform) = scene.entities.get_mut::<Transform>(entity) else {
            continue;
        };
        if let Some(g) = gravity {
            transform.velocity.y = (transform.velocity.y + g).min(max_speed);
        }
        transform.integrate();
    }
}
