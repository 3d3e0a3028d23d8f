//! Scene change requests.
//!
//! The play scene does not own the navigation shell. When it wants to leave,
//! it records a [`SceneRequest`]; the host takes it after the frame and
//! performs the switch.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneRequest {
    /// Return to the menu scene.
    Menu,
}

impl SceneRequest {
    pub fn name(&self) -> &'static str {
        match self {
            SceneRequest::Menu => "MENU",
        }
    }
}
