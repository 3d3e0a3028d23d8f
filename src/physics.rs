//! Axis-separated overlap between centred bounding boxes.
//!
//! The overlap on each axis is `(half_a + half_b) - |center_a - center_b|`:
//! positive means the boxes penetrate on that axis by that many pixels, zero
//! means they touch, and a more negative value means they are further apart.
//! Collision code compares the current overlap with the one computed from
//! last frame's positions to tell a fresh contact on an axis from a contact
//! that already existed.

use bevy_ecs::prelude::Entity;
use raylib::prelude::Vector2;

use crate::components::boundingbox::BoundingBox;
use crate::components::transform::Transform;
use crate::entity::EntityManager;

/// Per-axis overlap of two boxes given their centres and half sizes.
pub fn box_overlap(center_a: Vector2, half_a: Vector2, center_b: Vector2, half_b: Vector2) -> Vector2 {
    (half_a + half_b) - abs(center_a - center_b)
}

fn abs(v: Vector2) -> Vector2 {
    Vector2::new(v.x.abs(), v.y.abs())
}

/// Overlap of two entities at their current positions.
///
/// # Panics
///
/// If either entity lacks a [`Transform`] or a [`BoundingBox`].
pub fn overlap(entities: &EntityManager, a: Entity, b: Entity) -> Vector2 {
    overlap_at(entities, a, b, |t| t.pos)
}

/// Overlap of two entities at their positions from the previous frame.
///
/// # Panics
///
/// If either entity lacks a [`Transform`] or a [`BoundingBox`].
pub fn previous_overlap(entities: &EntityManager, a: Entity, b: Entity) -> Vector2 {
    overlap_at(entities, a, b, |t| t.prev_pos)
}

fn overlap_at(
    entities: &EntityManager,
    a: Entity,
    b: Entity,
    position: impl Fn(&Transform) -> Vector2,
) -> Vector2 {
    let box_a = entities.component::<BoundingBox>(a);
    let box_b = entities.component::<BoundingBox>(b);
    let pos_a = position(entities.component::<Transform>(a));
    let pos_b = position(entities.component::<Transform>(b));
    box_overlap(pos_a, box_a.half_size, pos_b, box_b.half_size)
}

/// Contact on one axis that did not exist last frame.
pub fn newly_overlapping(current: f32, previous: f32) -> bool {
    current >= 0.0 && previous <= 0.0
}
