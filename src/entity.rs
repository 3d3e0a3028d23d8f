//! Entity store with deferred structural changes.
//!
//! [`EntityManager`] owns every entity of a scene. Component data lives in a
//! private `bevy_ecs` [`World`], which gives O(1) lookups per component kind;
//! the manager layers the gameplay-facing bookkeeping on top:
//!
//! - an aggregate list of committed entities in creation order,
//! - one list per [`Tag`], also in creation order,
//! - a pending list of entities created since the last commit.
//!
//! # Commit model
//!
//! [`add_entity`](EntityManager::add_entity) spawns the entity right away so
//! components can be attached, but it only shows up in
//! [`entities`](EntityManager::entities) and
//! [`entities_with_tag`](EntityManager::entities_with_tag) after the next
//! [`update`](EntityManager::update). [`destroy`](EntityManager::destroy) only
//! clears the `alive` flag; the entity keeps appearing in query results until
//! the commit removes it from every list and despawns its components. A frame
//! that iterates a query result therefore never observes a structural change.

use std::any::type_name;

use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::entityinfo::{Committed, EntityInfo, Tag};

pub struct EntityManager {
    world: World,
    entities: Vec<Entity>,
    by_tag: FxHashMap<Tag, Vec<Entity>>,
    to_add: Vec<Entity>,
    total_entities: usize,
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityManager {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            entities: Vec::new(),
            by_tag: FxHashMap::default(),
            to_add: Vec::new(),
            total_entities: 0,
        }
    }

    /// Create an entity and queue it for the next commit.
    pub fn add_entity(&mut self, tag: Tag) -> Entity {
        self.spawn(tag, ())
    }

    /// Create an entity with an initial set of components and queue it.
    pub fn spawn<B: Bundle>(&mut self, tag: Tag, components: B) -> Entity {
        let info = EntityInfo::new(self.total_entities, tag);
        self.total_entities += 1;
        let entity = self.world.spawn((info, components)).id();
        self.to_add.push(entity);
        log::trace!("queued {} entity #{}", tag, info.id);
        entity
    }

    /// Commit point: publish queued entities, then drop the dead ones.
    pub fn update(&mut self) {
        for entity in std::mem::take(&mut self.to_add) {
            let Ok(mut entity_mut) = self.world.get_entity_mut(entity) else {
                continue;
            };
            let Some(tag) = entity_mut.get::<EntityInfo>().map(|info| info.tag) else {
                continue;
            };
            entity_mut.insert(Committed);
            self.entities.push(entity);
            self.by_tag.entry(tag).or_default().push(entity);
        }

        let world = &self.world;
        let is_alive = |entity: &Entity| {
            world
                .get::<EntityInfo>(*entity)
                .is_some_and(|info| info.alive)
        };

        let mut dead = Vec::new();
        self.entities.retain(|entity| {
            let keep = is_alive(entity);
            if !keep {
                dead.push(*entity);
            }
            keep
        });
        for list in self.by_tag.values_mut() {
            list.retain(is_alive);
        }

        for entity in dead {
            self.world.despawn(entity);
        }
    }

    /// Every committed entity, in creation order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Committed entities carrying `tag`, in creation order.
    pub fn entities_with_tag(&self, tag: Tag) -> &[Entity] {
        self.by_tag.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mark an entity dead. It is removed at the next [`update`](Self::update).
    pub fn destroy(&mut self, entity: Entity) {
        if let Some(mut info) = self.world.get_mut::<EntityInfo>(entity) {
            info.alive = false;
        }
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.world
            .get::<EntityInfo>(entity)
            .is_some_and(|info| info.alive)
    }

    pub fn tag(&self, entity: Entity) -> Option<Tag> {
        self.world.get::<EntityInfo>(entity).map(|info| info.tag)
    }

    /// Creation order index of the entity.
    pub fn id(&self, entity: Entity) -> Option<usize> {
        self.world.get::<EntityInfo>(entity).map(|info| info.id)
    }

    /// Number of committed entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities created since the last commit.
    pub fn pending_count(&self) -> usize {
        self.to_add.len()
    }

    /// Run bevy systems over the store's components. Systems that should only
    /// see committed entities filter on [`Committed`].
    pub fn run_schedule(&mut self, schedule: &mut Schedule) {
        schedule.run(&mut self.world);
    }

    pub fn insert_resource<R: Resource>(&mut self, resource: R) {
        self.world.insert_resource(resource);
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.world.get::<T>(entity)
    }

    pub fn get_mut<T: Component<Mutability = Mutable>>(
        &mut self,
        entity: Entity,
    ) -> Option<Mut<'_, T>> {
        self.world.get_mut::<T>(entity)
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.world.get::<T>(entity).is_some()
    }

    /// Attach or replace a component.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        if let Ok(mut entity_mut) = self.world.get_entity_mut(entity) {
            entity_mut.insert(component);
        }
    }

    /// Component the entity was built with.
    ///
    /// # Panics
    ///
    /// If the component is missing. Entities are spawned with the components
    /// their role needs, so a miss is a bug rather than a runtime condition.
    pub fn component<T: Component>(&self, entity: Entity) -> &T {
        self.world
            .get::<T>(entity)
            .unwrap_or_else(|| panic!("{entity:?} has no {} component", type_name::<T>()))
    }

    /// Mutable counterpart of [`component`](Self::component).
    ///
    /// # Panics
    ///
    /// If the component is missing.
    pub fn component_mut<T: Component<Mutability = Mutable>>(&mut self, entity: Entity) -> Mut<'_, T> {
        self.world
            .get_mut::<T>(entity)
            .unwrap_or_else(|| panic!("{entity:?} has no {} component", type_name::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use raylib::prelude::Vector2;

    use super::*;
    use crate::components::gravity::Gravity;
    use crate::components::transform::Transform;

    #[test]
    fn test_added_entity_hidden_until_commit() {
        let mut em = EntityManager::new();
        let e = em.add_entity(Tag::Tile);
        assert!(em.entities().is_empty());
        assert!(em.entities_with_tag(Tag::Tile).is_empty());
        assert_eq!(em.pending_count(), 1);
        em.update();
        assert_eq!(em.entities(), &[e]);
        assert_eq!(em.entities_with_tag(Tag::Tile), &[e]);
        assert_eq!(em.pending_count(), 0);
    }

    #[test]
    fn test_components_usable_before_commit() {
        let mut em = EntityManager::new();
        let e = em.add_entity(Tag::Player);
        em.insert(e, Gravity::new(2.0));
        assert!(em.has::<Gravity>(e));
        assert_eq!(em.component::<Gravity>(e).gravity, 2.0);
    }

    #[test]
    fn test_destroy_is_deferred() {
        let mut em = EntityManager::new();
        let a = em.add_entity(Tag::Coin);
        let b = em.add_entity(Tag::Coin);
        em.update();
        em.destroy(a);
        assert!(!em.is_alive(a));
        assert_eq!(em.entities_with_tag(Tag::Coin), &[a, b]);
        assert_eq!(em.entities(), &[a, b]);
        em.update();
        assert_eq!(em.entities_with_tag(Tag::Coin), &[b]);
        assert_eq!(em.entities(), &[b]);
        assert!(em.get::<EntityInfo>(a).is_none());
    }

    #[test]
    fn test_destroyed_before_commit_never_visible() {
        let mut em = EntityManager::new();
        let e = em.add_entity(Tag::Bullet);
        em.destroy(e);
        em.update();
        assert!(em.entities().is_empty());
        assert!(em.entities_with_tag(Tag::Bullet).is_empty());
    }

    #[test]
    fn test_insertion_order_and_ids() {
        let mut em = EntityManager::new();
        let t1 = em.add_entity(Tag::Tile);
        let p = em.add_entity(Tag::Player);
        let t2 = em.add_entity(Tag::Tile);
        em.update();
        assert_eq!(em.entities(), &[t1, p, t2]);
        assert_eq!(em.entities_with_tag(Tag::Tile), &[t1, t2]);
        assert_eq!(em.id(t1), Some(0));
        assert_eq!(em.id(p), Some(1));
        assert_eq!(em.id(t2), Some(2));
        assert_eq!(em.tag(p), Some(Tag::Player));
    }

    #[test]
    fn test_spawn_with_bundle() {
        let mut em = EntityManager::new();
        let e = em.spawn(Tag::Dec, (Transform::at(Vector2::new(1.0, 2.0)),));
        em.update();
        assert_eq!(em.component::<Transform>(e).pos, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_component_mut_writes_through() {
        let mut em = EntityManager::new();
        let e = em.spawn(Tag::Tile, Transform::at(Vector2::zero()));
        em.component_mut::<Transform>(e).pos.x = 5.0;
        assert_eq!(em.component::<Transform>(e).pos.x, 5.0);
    }

    #[test]
    #[should_panic(expected = "has no")]
    fn test_missing_component_panics() {
        let mut em = EntityManager::new();
        let e = em.add_entity(Tag::Tile);
        let _ = em.component::<Gravity>(e);
    }

    fn kill_committed(mut query: Query<&mut EntityInfo, With<Committed>>) {
        for mut info in query.iter_mut() {
            info.alive = false;
        }
    }

    #[test]
    fn test_schedule_sees_only_committed_entities() {
        let mut em = EntityManager::new();
        let tile = em.add_entity(Tag::Tile);
        em.update();
        let coin = em.add_entity(Tag::Coin);

        let mut schedule = Schedule::default();
        schedule.add_systems(kill_committed);
        em.run_schedule(&mut schedule);

        assert!(!em.is_alive(tile));
        assert!(em.is_alive(coin));
        em.update();
        assert_eq!(em.entities(), &[coin]);
    }
}
