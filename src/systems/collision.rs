//! Collision system.
//!
//! Runs after movement, on the positions it produced. Every check compares
//! the current overlap with the one from the previous frame's positions (see
//! [`crate::physics`]) so that only a contact that just happened on an axis
//! is resolved on that axis.
//!
//! Order within a frame:
//!
//! 1. bullets against tiles: a bullet entering a tile sideways is destroyed
//!    and breaks a brick;
//! 2. player against coins: touching a coin collects it;
//! 3. player against tiles: landing, head bumps and side pushes;
//! 4. world bounds: falling out of the view respawns the player, the left
//!    edge of the level blocks it.

use bevy_ecs::prelude::Entity;

use crate::components::animation::SpriteAnimation;
use crate::components::boundingbox::BoundingBox;
use crate::components::entityinfo::Tag;
use crate::components::gravity::Gravity;
use crate::components::input::PlayerInput;
use crate::components::transform::Transform;
use crate::physics::{newly_overlapping, overlap, previous_overlap};
use crate::scene::play::{BRICK, COIN_SCORE, QUESTION, QUESTION_HIT, ScenePlay};
use crate::scene::spawn::{spawn_brick_debris, spawn_coin};

pub fn collision(scene: &mut ScenePlay) {
    bullets_vs_tiles(scene);
    player_vs_coins(scene);
    player_vs_tiles(scene);
    world_bounds(scene);
}

fn tile_name(scene: &ScenePlay, tile: Entity) -> &str {
    scene.entities.component::<SpriteAnimation>(tile).name()
}

fn bullets_vs_tiles(scene: &mut ScenePlay) {
    let grid = scene.grid_size;
    let bullets = scene.entities.entities_with_tag(Tag::Bullet).to_vec();
    let tiles = scene.entities.entities_with_tag(Tag::Tile).to_vec();

    for &bullet in &bullets {
        for &tile in &tiles {
            let current = overlap(&scene.entities, bullet, tile);
            let previous = previous_overlap(&scene.entities, bullet, tile);
            if current.y > 0.0 && -grid.x < current.x && newly_overlapping(current.x, previous.x) {
                let is_brick = tile_name(scene, tile) == BRICK;
                if is_brick {
                    spawn_brick_debris(scene, tile);
                }
                scene.entities.destroy(bullet);
            }
        }
    }
}

fn player_vs_coins(scene: &mut ScenePlay) {
    let player = scene.player;
    let coins = scene.entities.entities_with_tag(Tag::Coin).to_vec();
    for coin in coins {
        if !scene.entities.is_alive(coin) {
            continue;
        }
        let current = overlap(&scene.entities, coin, player);
        if current.x > 0.0 && current.y > 0.0 {
            scene.entities.destroy(coin);
            scene.add_score(COIN_SCORE);
            log::debug!("coin collected, score {}", scene.score);
        }
    }
}

fn player_vs_tiles(scene: &mut ScenePlay) {
    let player = scene.player;
    let grid = scene.grid_size;
    scene.entities.component_mut::<Gravity>(player).gravity = scene.player_config.gravity;

    let tiles = scene.entities.entities_with_tag(Tag::Tile).to_vec();
    for tile in tiles {
        let current = overlap(&scene.entities, tile, player);
        let previous = previous_overlap(&scene.entities, tile, player);
        let tile_pos = scene.entities.component::<Transform>(tile).pos;
        let dy = tile_pos.y - scene.entities.component::<Transform>(player).pos.y;
        let vertical_contact = current.x > 0.0
            && -grid.y < current.y
            && newly_overlapping(current.y, previous.y);

        if vertical_contact && dy > 0.0 {
            // Landing on top of the tile.
            scene.entities.component_mut::<PlayerInput>(player).can_jump = true;
            scene.entities.component_mut::<Gravity>(player).gravity = 0.0;
            let mut transform = scene.entities.component_mut::<Transform>(player);
            transform.velocity.y = 0.0;
            transform.pos.y -= current.y;
        }

        if vertical_contact && dy < 0.0 {
            // Head bump from below.
            {
                let mut transform = scene.entities.component_mut::<Transform>(player);
                transform.pos.y += current.y;
                transform.velocity.y = 0.0;
            }
            let name = tile_name(scene, tile).to_owned();
            match name.as_str() {
                QUESTION => {
                    let hit = scene.animation(QUESTION_HIT);
                    scene.entities.component_mut::<SpriteAnimation>(tile).animation = hit;
                    spawn_coin(scene, tile);
                }
                BRICK => spawn_brick_debris(scene, tile),
                _ => {}
            }
        }

        let dx = tile_pos.x - scene.entities.component::<Transform>(player).pos.x;
        if current.y > 0.0 && -grid.x < current.x && newly_overlapping(current.x, previous.x) {
            let mut transform = scene.entities.component_mut::<Transform>(player);
            if dx > 0.0 {
                transform.pos.x -= current.x;
            } else {
                transform.pos.x += current.x;
            }
        }
    }
}

fn world_bounds(scene: &mut ScenePlay) {
    let player = scene.player;
    let pos = scene.entities.component::<Transform>(player).pos;

    if pos.y > scene.viewport.y {
        let animation = &scene.entities.component::<SpriteAnimation>(player).animation;
        let spawn = scene.grid_to_mid_pixel(
            scene.player_config.x,
            scene.player_config.y,
            animation,
        );
        log::debug!("player fell out of the world, respawning");
        scene.entities.component_mut::<Transform>(player).pos = spawn;
    }

    let half_width = scene.entities.component::<BoundingBox>(player).half_size.x;
    let mut transform = scene.entities.component_mut::<Transform>(player);
    if transform.pos.x < half_width {
        transform.pos.x = half_width;
    }
}
