//! Bookkeeping component attached to every entity by the
//! [`EntityManager`](crate::entity::EntityManager).

use std::fmt;

use bevy_ecs::prelude::Component;

/// Gameplay role of an entity. Collections in the store are indexed by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Player,
    Tile,
    Bullet,
    Coin,
    /// Non-collidable decoration.
    Dec,
}

impl Tag {
    pub const ALL: [Tag; 5] = [Tag::Player, Tag::Tile, Tag::Bullet, Tag::Coin, Tag::Dec];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Tile => "tile",
            Tag::Bullet => "bullet",
            Tag::Coin => "coin",
            Tag::Dec => "dec",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity data the store keeps per entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityInfo {
    /// Creation order index, unique for the lifetime of the store.
    pub id: usize,
    pub tag: Tag,
    /// Cleared by `destroy`; the entity leaves the store at the next commit.
    pub alive: bool,
}

impl EntityInfo {
    pub fn new(id: usize, tag: Tag) -> Self {
        Self {
            id,
            tag,
            alive: true,
        }
    }
}

/// Marker the store adds when an entity is committed. Scheduled systems
/// filter on it so they see the same entities as the ordered queries.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Committed;
