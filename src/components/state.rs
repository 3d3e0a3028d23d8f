//! Player animation state machine.
//!
//! The state is recomputed every frame from velocity and shoot intent. Only the
//! last evaluation is remembered: `changed` is raised when the new state
//! differs from the current one, which is what gates an animation swap.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Stand,
    Run,
    Air,
    StandShoot,
    RunShoot,
    AirShoot,
}

impl PlayerState {
    /// Derive the state from the player's velocity and shoot intent.
    ///
    /// Vertical motion wins over horizontal motion; shooting picks the
    /// shooting variant of whichever movement state applies.
    pub fn from_motion(velocity_x: f32, velocity_y: f32, shooting: bool) -> Self {
        match (velocity_y != 0.0, velocity_x != 0.0, shooting) {
            (true, _, true) => PlayerState::AirShoot,
            (true, _, false) => PlayerState::Air,
            (false, true, true) => PlayerState::RunShoot,
            (false, true, false) => PlayerState::Run,
            (false, false, true) => PlayerState::StandShoot,
            (false, false, false) => PlayerState::Stand,
        }
    }

    /// Name of the animation shown in this state.
    pub fn animation_name(&self) -> &'static str {
        match self {
            PlayerState::Stand => "Stand",
            PlayerState::Run => "Run",
            PlayerState::Air => "Air",
            PlayerState::StandShoot => "StandShoot",
            PlayerState::RunShoot => "RunShoot",
            PlayerState::AirShoot => "AirShoot",
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStateMachine {
    pub state: PlayerState,
    pub previous: PlayerState,
    /// Set by the last [`transition`](Self::transition) when the state moved.
    pub changed: bool,
}

impl PlayerStateMachine {
    pub fn new(state: PlayerState) -> Self {
        Self {
            state,
            previous: state,
            changed: false,
        }
    }

    /// Move to `next`. Returns whether the state actually changed.
    pub fn transition(&mut self, next: PlayerState) -> bool {
        if self.state != next {
            self.previous = self.state;
            self.state = next;
            self.changed = true;
        } else {
            self.changed = false;
        }
        self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_motion_table() {
        assert_eq!(PlayerState::from_motion(0.0, 0.0, false), PlayerState::Stand);
        assert_eq!(PlayerState::from_motion(0.0, 0.0, true), PlayerState::StandShoot);
        assert_eq!(PlayerState::from_motion(5.0, 0.0, false), PlayerState::Run);
        assert_eq!(PlayerState::from_motion(-5.0, 0.0, true), PlayerState::RunShoot);
        assert_eq!(PlayerState::from_motion(5.0, 1.0, false), PlayerState::Air);
        assert_eq!(PlayerState::from_motion(0.0, -20.0, true), PlayerState::AirShoot);
    }

    #[test]
    fn test_initial_state_is_stand() {
        let sm = PlayerStateMachine::default();
        assert_eq!(sm.state, PlayerState::Stand);
        assert!(!sm.changed);
    }

    #[test]
    fn test_transition_flags_only_real_changes() {
        let mut sm = PlayerStateMachine::new(PlayerState::Stand);
        assert!(!sm.transition(PlayerState::Stand));
        assert!(sm.transition(PlayerState::Run));
        assert_eq!(sm.previous, PlayerState::Stand);
        assert!(!sm.transition(PlayerState::Run));
        assert!(!sm.changed);
        assert_eq!(sm.previous, PlayerState::Stand);
        assert!(sm.transition(PlayerState::Air));
        assert_eq!(sm.previous, PlayerState::Run);
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(PlayerState::RunShoot.animation_name(), "RunShoot");
        assert_eq!(PlayerState::Air.animation_name(), "Air");
    }
}
