//! Event types passed from the host into scenes.
//!
//! - [`action`] – abstract input actions and their start/end phase

pub mod action;
