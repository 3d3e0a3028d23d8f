//! Entity builders for the gameplay scene.
//!
//! Every builder queues its entity through
//! [`EntityManager::spawn`](crate::entity::EntityManager::spawn), so new
//! entities join the scene at the next commit. Builders that react to a
//! collision (bullets, coins, debris) take the entity they originate from.

use bevy_ecs::prelude::Entity;
use raylib::prelude::Vector2;

use crate::components::animation::SpriteAnimation;
use crate::components::boundingbox::BoundingBox;
use crate::components::entityinfo::Tag;
use crate::components::gravity::Gravity;
use crate::components::input::PlayerInput;
use crate::components::lifespan::Lifespan;
use crate::components::state::{PlayerState, PlayerStateMachine};
use crate::components::transform::Transform;
use crate::level::Placement;
use crate::scene::play::{BRICK_DEBRIS, COIN_SPIN, ScenePlay};

/// Draw scale of level tiles and decorations.
const TILE_SCALE: Vector2 = Vector2::new(4.0, 4.0);
/// The player sprite faces left, so facing right flips it.
const PLAYER_SCALE: Vector2 = Vector2::new(-2.0, 2.0);
/// Bullet speed per unit of shooter scale.
const BULLET_SPEED: f32 = 5.0;
const BULLET_LIFESPAN: u64 = 90;
const COIN_LIFESPAN: u64 = 1000;
const DEBRIS_LIFESPAN: u64 = 10;

/// Spawn the player at its configured cell, standing.
pub fn spawn_player(scene: &mut ScenePlay) -> Entity {
    let config = scene.player_config.clone();
    let animation = scene.animation(PlayerState::Stand.animation_name());
    let pos = scene.grid_to_mid_pixel(config.x, config.y, &animation);
    let entity = scene.entities.spawn(
        Tag::Player,
        (
            SpriteAnimation::looping(animation),
            Transform::new(pos, Vector2::new(config.speed, 0.0), PLAYER_SCALE, 0.0),
            BoundingBox::new(Vector2::new(config.cx * 2.0, config.cy * 2.0)),
            PlayerInput::default(),
            PlayerStateMachine::new(PlayerState::Stand),
            Gravity::new(config.gravity),
        ),
    );
    log::debug!("player spawned at ({}, {})", pos.x, pos.y);
    entity
}

/// Solid, collidable level cell.
pub fn spawn_tile(scene: &mut ScenePlay, placement: &Placement) -> Entity {
    let animation = scene.animation(&placement.animation);
    let pos = scene.grid_to_mid_pixel(placement.x, placement.y, &animation);
    let grid = scene.grid_size;
    scene.entities.spawn(
        Tag::Tile,
        (
            SpriteAnimation::looping(animation),
            Transform::new(pos, Vector2::zero(), TILE_SCALE, 0.0),
            BoundingBox::new(grid),
        ),
    )
}

/// Scenery without a bounding box.
pub fn spawn_dec(scene: &mut ScenePlay, placement: &Placement) -> Entity {
    let animation = scene.animation(&placement.animation);
    let pos = scene.grid_to_mid_pixel(placement.x, placement.y, &animation);
    scene.entities.spawn(
        Tag::Dec,
        (
            SpriteAnimation::looping(animation),
            Transform::new(pos, Vector2::zero(), TILE_SCALE, 0.0),
        ),
    )
}

/// Bullet leaving the shooter's centre in the direction it faces.
pub fn spawn_bullet(scene: &mut ScenePlay, shooter: Entity) -> Entity {
    let origin = *scene.entities.component::<Transform>(shooter);
    let animation = scene.animation(&scene.player_config.weapon);
    let size = animation.size();
    let frame = scene.current_frame;
    scene.entities.spawn(
        Tag::Bullet,
        (
            SpriteAnimation::looping(animation),
            Transform::new(
                origin.pos,
                Vector2::new(-BULLET_SPEED * origin.scale.x, 0.0),
                origin.scale,
                0.0,
            ),
            Lifespan::new(BULLET_LIFESPAN, frame),
            BoundingBox::new(size),
        ),
    )
}

/// Coin popping out one cell above a bumped tile.
pub fn spawn_coin(scene: &mut ScenePlay, tile: Entity) -> Entity {
    let origin = *scene.entities.component::<Transform>(tile);
    let animation = scene.animation(COIN_SPIN);
    let size = animation.size() * origin.scale.x.abs();
    let pos = origin.pos - Vector2::new(0.0, scene.grid_size.y);
    let frame = scene.current_frame;
    scene.entities.spawn(
        Tag::Coin,
        (
            SpriteAnimation::looping(animation),
            Transform::new(pos, Vector2::zero(), origin.scale, 0.0),
            Lifespan::new(COIN_LIFESPAN, frame),
            BoundingBox::new(size),
        ),
    )
}

/// Turn a brick into short-lived debris in place.
///
/// The brick keeps its entity; it swaps to the debris animation and gets a
/// lifespan, so it stays collidable until the lifespan runs out.
pub fn spawn_brick_debris(scene: &mut ScenePlay, tile: Entity) {
    let animation = scene.animation(BRICK_DEBRIS);
    let frame = scene.current_frame;
    scene.entities.component_mut::<SpriteAnimation>(tile).animation = animation;
    scene
        .entities
        .insert(tile, Lifespan::new(DEBRIS_LIFESPAN, frame));
}
