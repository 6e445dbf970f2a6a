//! Scene descriptor construction.

use showrunner_core::{CAMERA_TARGET, Location, SceneDescriptor};
use showrunner_interface::SceneEnvironment;
use tracing::debug;

/// Builds the [`SceneDescriptor`] for the current environment.
///
/// The environment has a single location named after the scene. Its
/// interactables are the environment's roster plus the synthetic
/// [`CAMERA_TARGET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneCatalog;

impl SceneCatalog {
    /// Snapshot the environment's rosters.
    pub fn build(environment: &dyn SceneEnvironment) -> SceneDescriptor {
        let scene = environment.scene_name();
        let actors = environment.actor_names();

        let mut interactables = environment.interactable_names();
        interactables.push(CAMERA_TARGET.to_string());

        debug!(
            scene = %scene,
            actors = actors.len(),
            interactables = interactables.len(),
            "Built scene descriptor"
        );

        let location = Location::new(scene.clone(), interactables);
        SceneDescriptor::new(scene, actors, vec![location])
    }
}
