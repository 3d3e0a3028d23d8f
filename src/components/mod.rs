//! Components attached to gameplay entities.
//!
//! Submodules overview:
//! - [`animation`] – the sprite animation an entity plays and whether it loops
//! - [`boundingbox`] – axis-aligned box centred on the entity position
//! - [`entityinfo`] – creation id, [`Tag`](entityinfo::Tag) and alive flag
//! - [`gravity`] – per-frame vertical acceleration
//! - [`input`] – the player's movement and shoot intents
//! - [`lifespan`] – frame budget after which an entity is destroyed
//! - [`state`] – player state machine driving animation swaps
//! - [`transform`] – position, previous position, velocity, scale and angle
pub mod animation;
pub mod boundingbox;
pub mod entityinfo;
pub mod gravity;
pub mod input;
pub mod lifespan;
pub mod state;
pub mod transform;
