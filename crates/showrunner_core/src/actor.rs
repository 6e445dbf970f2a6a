//! Actor state and target positions.

use serde::{Deserialize, Serialize};

/// A point in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate
    pub x: f32,
    /// Y (up) coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Position {
    /// Creates a position.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The same point moved down by `offset`.
    pub fn lowered(self, offset: f32) -> Self {
        Self {
            y: self.y - offset,
            ..self
        }
    }
}

/// Animation flags derived during playback and pushed to an actor.
///
/// Never persisted. The sequencer moves an actor through these states:
///
/// ```
/// use showrunner_core::ActorState;
///
/// let mut state = ActorState::idle();
/// state.start_walking();
/// state.start_talking();
/// // Talking never overrides walking.
/// assert!(state.is_walking && !state.is_talking);
///
/// state.reset();
/// assert_eq!(state, ActorState::idle());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActorState {
    /// Walking animation
    pub is_walking: bool,
    /// Talking animation
    pub is_talking: bool,
    /// Idle animation
    pub is_idling: bool,
    /// Jumping animation
    pub is_jumping: bool,
}

impl ActorState {
    /// Resting state between actions.
    pub fn idle() -> Self {
        Self {
            is_idling: true,
            ..Self::default()
        }
    }

    /// Enter the walking state.
    pub fn start_walking(&mut self) {
        self.is_walking = true;
        self.is_idling = false;
    }

    /// Enter the talking state unless the actor is already walking.
    pub fn start_talking(&mut self) {
        if !self.is_walking {
            self.is_talking = true;
            self.is_idling = false;
        }
    }

    /// Hold the current pose while idling through the settle delay.
    pub fn settle(&mut self) {
        self.is_idling = true;
    }

    /// Clear every motion flag and return to idle.
    pub fn reset(&mut self) {
        *self = Self::idle();
    }
}
