//! Drawing.
//!
//! The scene never talks to the window. [`systems::render`](crate::systems::render)
//! describes a frame as a [`frame::Frame`] display list, and [`present`]
//! replays that list with raylib inside a 2D camera centred on the frame's
//! view centre.
pub mod frame;
pub mod present;
