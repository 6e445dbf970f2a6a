//! Scene descriptor sent once to the episode source.

use serde::{Deserialize, Serialize};

/// Synthetic interactable appended to every location.
///
/// Actors may be scripted to look at the camera even though no scene object
/// carries that name.
pub const CAMERA_TARGET: &str = "Camera";

/// One location and the objects actors can interact with there.
///
/// # Examples
///
/// ```
/// use showrunner_core::Location;
///
/// let location = Location::new("Kitchen", vec!["Fridge".to_string()]);
/// let json = serde_json::to_value(&location).unwrap();
/// assert_eq!(json["title"], "Kitchen");
/// assert_eq!(json["interactableObjects"][0], "Fridge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Location name
    #[serde(rename = "title")]
    pub name: String,
    /// Interactable object names, in roster order
    #[serde(rename = "interactableObjects", default)]
    pub interactables: Vec<String>,
}

impl Location {
    /// Creates a location from its name and interactables.
    pub fn new(name: impl Into<String>, interactables: Vec<String>) -> Self {
        Self {
            name: name.into(),
            interactables,
        }
    }
}

/// Everything the episode source needs to know about this client's scene.
///
/// Built once at startup and immutable thereafter.
///
/// # Examples
///
/// ```
/// use showrunner_core::{Location, SceneDescriptor};
///
/// let descriptor = SceneDescriptor::builder()
///     .scene_id("Studio")
///     .actors(vec!["Ann".to_string(), "Bob".to_string()])
///     .locations(vec![Location::new("Studio", vec!["Camera".to_string()])])
///     .build()
///     .unwrap();
///
/// assert_eq!(descriptor.actors().len(), 2);
/// let json = serde_json::to_value(&descriptor).unwrap();
/// assert_eq!(json["characters"][1], "Bob");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SceneDescriptor {
    /// Identifier of the scene the descriptor was built from
    #[serde(rename = "sceneId", default, skip_serializing_if = "String::is_empty")]
    #[builder(default)]
    scene_id: String,
    /// Actor names, in roster order
    #[serde(rename = "characters", default)]
    #[builder(default)]
    actors: Vec<String>,
    /// Locations and their interactables
    #[serde(default)]
    #[builder(default)]
    locations: Vec<Location>,
}

impl SceneDescriptor {
    /// Creates a descriptor from its parts.
    pub fn new(scene_id: impl Into<String>, actors: Vec<String>, locations: Vec<Location>) -> Self {
        Self {
            scene_id: scene_id.into(),
            actors,
            locations,
        }
    }

    /// Creates a new scene descriptor builder.
    pub fn builder() -> SceneDescriptorBuilder {
        SceneDescriptorBuilder::default()
    }

    /// True when there are no actors to cast.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
