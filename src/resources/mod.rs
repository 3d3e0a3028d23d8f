//! Long-lived data shared by the scene and the host loop.
//!
//! Overview
//! - `animationstore` – named animation definitions copied onto entities
//! - `assets` – asset manifest parsing and animation registry construction
//! - `debugview` – debug drawing toggles
//! - `fontstore` – loaded fonts keyed by name
//! - `gameconfig` – INI-backed window and path settings
//! - `input` – keyboard to action bindings
//! - `scenerequest` – requests to leave the current scene
//! - `simframe` – frame counter read by scheduled systems
//! - `texturestore` – loaded textures keyed by name
pub mod animationstore;
pub mod assets;
pub mod debugview;
pub mod fontstore;
pub mod gameconfig;
pub mod input;
pub mod scenerequest;
pub mod simframe;
pub mod texturestore;
