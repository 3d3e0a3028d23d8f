//! Lifespan system.
//!
//! Destroys every committed entity whose [`Lifespan`] has run out. Destruction
//! is deferred, so the entity is still visible to the systems that run later
//! in the same frame.

use bevy_ecs::prelude::*;

use crate::components::entityinfo::{Committed, EntityInfo};
use crate::components::lifespan::Lifespan;
use crate::resources::simframe::SimFrame;

pub fn lifespan(
    frame: Res<SimFrame>,
    mut query: Query<(&Lifespan, &mut EntityInfo), With<Committed>>,
) {
    for (lifespan, mut info) in query.iter_mut() {
        if info.alive && lifespan.expired(frame.0) {
            log::trace!("entity #{} outlived its lifespan", info.id);
            info.alive = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entityinfo::Tag;
    use crate::entity::EntityManager;

    #[test]
    fn test_expires_committed_entities_only() {
        let mut em = EntityManager::new();
        let old = em.spawn(Tag::Bullet, Lifespan::new(5, 0));
        let young = em.spawn(Tag::Bullet, Lifespan::new(5, 3));
        em.update();
        let pending = em.spawn(Tag::Bullet, Lifespan::new(0, 0));

        let mut schedule = Schedule::default();
        schedule.add_systems(lifespan);
        em.insert_resource(SimFrame(5));
        em.run_schedule(&mut schedule);

        assert!(!em.is_alive(old));
        assert!(em.is_alive(young));
        assert!(em.is_alive(pending));
    }
}
