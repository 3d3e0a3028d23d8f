//! Property tests for the entity store.
//!
//! Random sequences of add, destroy and commit operations are replayed
//! against the [`EntityManager`] and a plain model of it; the store must agree
//! with the model after every step.

use bevy_ecs::prelude::Entity;
use platformer::components::entityinfo::Tag;
use platformer::entity::EntityManager;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum StoreOp {
    Add(usize),
    Destroy(usize),
    Commit,
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        3 => (0..Tag::ALL.len()).prop_map(StoreOp::Add),
        2 => (0..64usize).prop_map(StoreOp::Destroy),
        1 => Just(StoreOp::Commit),
    ]
}

#[derive(Default)]
struct Model {
    created: Vec<(Entity, Tag)>,
    pending: Vec<Entity>,
    committed: Vec<Entity>,
    dead: Vec<Entity>,
}

impl Model {
    fn commit(&mut self) {
        self.committed.append(&mut self.pending);
        let dead = &self.dead;
        self.committed.retain(|e| !dead.contains(e));
    }

    fn tag_of(&self, entity: Entity) -> Tag {
        self.created
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, t)| *t)
            .unwrap()
    }
}

fn check(em: &EntityManager, model: &Model) -> Result<(), TestCaseError> {
    prop_assert_eq!(em.entities(), model.committed.as_slice());
    prop_assert_eq!(em.pending_count(), model.pending.len());
    for tag in Tag::ALL {
        let expected: Vec<Entity> = model
            .committed
            .iter()
            .copied()
            .filter(|e| model.tag_of(*e) == tag)
            .collect();
        prop_assert_eq!(em.entities_with_tag(tag), expected.as_slice());
    }
    Ok(())
}

proptest! {
    #[test]
    fn tag_lists_partition_committed_entities(ops in prop::collection::vec(store_op_strategy(), 0..80)) {
        let mut em = EntityManager::new();
        let mut model = Model::default();

        for op in &ops {
            match op {
                StoreOp::Add(i) => {
                    let tag = Tag::ALL[*i];
                    let e = em.add_entity(tag);
                    model.created.push((e, tag));
                    model.pending.push(e);
                }
                StoreOp::Destroy(i) => {
                    if !model.created.is_empty() {
                        let (e, _) = model.created[i % model.created.len()];
                        // Entities already removed stay removed.
                        if model.committed.contains(&e) || model.pending.contains(&e) {
                            em.destroy(e);
                            prop_assert!(!em.is_alive(e));
                            if !model.dead.contains(&e) {
                                model.dead.push(e);
                            }
                        }
                    }
                }
                StoreOp::Commit => {
                    em.update();
                    model.commit();
                }
            }
            check(&em, &model)?;
        }

        em.update();
        model.commit();
        check(&em, &model)?;
        for e in em.entities() {
            prop_assert!(em.is_alive(*e));
        }
    }

    #[test]
    fn destroy_never_changes_queries_before_commit(count in 1..30usize, victims in prop::collection::vec(0..30usize, 1..10)) {
        let mut em = EntityManager::new();
        let all: Vec<Entity> = (0..count).map(|i| em.add_entity(Tag::ALL[i % Tag::ALL.len()])).collect();
        em.update();
        let before = em.entities().to_vec();
        let coins_before = em.entities_with_tag(Tag::Coin).to_vec();

        for v in &victims {
            em.destroy(all[v % count]);
        }
        prop_assert_eq!(em.entities(), before.as_slice());
        prop_assert_eq!(em.entities_with_tag(Tag::Coin), coins_before.as_slice());

        em.update();
        for v in &victims {
            prop_assert!(!em.entities().contains(&all[v % count]));
        }
    }

    #[test]
    fn ids_follow_creation_order(count in 1..50usize) {
        let mut em = EntityManager::new();
        let all: Vec<Entity> = (0..count).map(|_| em.add_entity(Tag::Tile)).collect();
        for (i, e) in all.iter().enumerate() {
            prop_assert_eq!(em.id(*e), Some(i));
        }
    }
}
