//! Abstract input actions.
//!
//! The host translates raw device input into [`ActionEvent`]s through an
//! [`ActionMap`](crate::resources::input::ActionMap); scenes only ever see
//! these. An action starts when its key goes down and ends when it comes up.

use std::fmt;

/// Enumeration of logical actions understood by the play scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Pause,
    Quit,
    /// Show or hide sprites.
    ToggleTexture,
    /// Show or hide bounding boxes.
    ToggleCollision,
    /// Show or hide the level grid.
    ToggleGrid,
    Jump,
    Down,
    Left,
    Right,
    Shoot,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Pause => "PAUSE",
            Action::Quit => "QUIT",
            Action::ToggleTexture => "TOGGLE_TEXTURE",
            Action::ToggleCollision => "TOGGLE_COLLISION",
            Action::ToggleGrid => "TOGGLE_GRID",
            Action::Jump => "JUMP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
            Action::Shoot => "SHOOT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the action began or ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionPhase {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub action: Action,
    pub phase: ActionPhase,
}

impl ActionEvent {
    pub fn start(action: Action) -> Self {
        Self {
            action,
            phase: ActionPhase::Start,
        }
    }

    pub fn end(action: Action) -> Self {
        Self {
            action,
            phase: ActionPhase::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_action_name() {
        assert_eq!(Action::ToggleCollision.to_string(), "TOGGLE_COLLISION");
        assert_eq!(Action::Shoot.to_string(), "SHOOT");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(ActionEvent::start(Action::Jump).phase, ActionPhase::Start);
        assert_eq!(ActionEvent::end(Action::Shoot).phase, ActionPhase::End);
    }
}
