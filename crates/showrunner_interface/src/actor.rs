//! Actor-facing traits.
//!
//! Actors are resolved by name through an injected [`ActorRegistry`] rather
//! than a scene-wide lookup. An actor exposes capabilities; the sequencer
//! only drives actors that have all of them.

use showrunner_core::{ActorState, Position};
use std::sync::Arc;

/// Navigation surface of an actor.
pub trait Movement: Send + Sync {
    /// Turn toward a point immediately.
    fn look_at(&self, point: Position);

    /// Start moving toward a point. Arrival is not reported.
    fn move_to(&self, point: Position);
}

/// Animation-state surface of an actor.
pub trait Animator: Send + Sync {
    /// Push the current animation flags.
    fn apply(&self, state: ActorState);
}

/// A scriptable character.
///
/// Capabilities are optional; an actor missing any of them is skipped.
pub trait Actor: Send + Sync {
    /// Actor name as used in scripts.
    fn name(&self) -> &str;

    /// Movement capability.
    fn movement(&self) -> Option<&dyn Movement>;

    /// Voice capability.
    fn voice(&self) -> Option<&dyn crate::ClipPlayer>;

    /// Animation capability.
    fn animator(&self) -> Option<&dyn Animator>;
}

/// A named thing an actor can look at or walk to.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Target name
    pub name: String,
    /// Current position
    pub position: Position,
}

impl Target {
    /// Creates a target.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Name lookup for actors and targets, populated once at startup.
pub trait ActorRegistry: Send + Sync {
    /// Resolve an actor by name.
    fn resolve_actor(&self, name: &str) -> Option<Arc<dyn Actor>>;

    /// Resolve any named target (actors, interactables, the camera).
    fn resolve_target(&self, name: &str) -> Option<Target>;
}

/// Rosters of the current environment.
pub trait SceneEnvironment: Send + Sync {
    /// Name of the current scene; doubles as its single location name.
    fn scene_name(&self) -> String;

    /// Actor names in roster order.
    fn actor_names(&self) -> Vec<String>;

    /// Interactable object names in roster order.
    fn interactable_names(&self) -> Vec<String>;
}

/// On-screen text surface.
pub trait StatusDisplay: Send + Sync {
    /// Replace the title line.
    fn show_title(&self, title: &str);

    /// Replace the caption line.
    fn show_caption(&self, caption: &str);
}
