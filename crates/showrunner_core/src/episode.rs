//! Episode scripts and their storage handles.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the script file inside an episode directory.
pub const SCRIPT_FILE_NAME: &str = "script.json";

/// One scripted step: an actor and optional look/walk/speak directives.
///
/// Empty strings mean "not set"; `null` in the script reads as empty too.
///
/// # Examples
///
/// ```
/// use showrunner_core::Action;
///
/// let action: Action = serde_json::from_str(
///     r#"{"character": "Ann", "voice_line": "hi", "looking_at": "", "walking_to": ""}"#,
/// ).unwrap();
///
/// assert_eq!(action.speaks(), Some("hi"));
/// assert_eq!(action.looks_at(), None);
/// assert!(!action.is_noop());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Action {
    /// Name of the acting actor
    #[serde(rename = "character")]
    pub actor: String,
    /// Spoken text
    #[serde(rename = "voice_line", default, deserialize_with = "null_as_empty")]
    pub line: String,
    /// Target to face
    #[serde(rename = "looking_at", default, deserialize_with = "null_as_empty")]
    pub look_target: String,
    /// Target to walk to
    #[serde(rename = "walking_to", default, deserialize_with = "null_as_empty")]
    pub walk_target: String,
}

impl Action {
    /// Creates an action with no directives.
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            ..Default::default()
        }
    }

    /// Sets the spoken line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = line.into();
        self
    }

    /// Sets the look target.
    pub fn with_look_target(mut self, target: impl Into<String>) -> Self {
        self.look_target = target.into();
        self
    }

    /// Sets the walk target.
    pub fn with_walk_target(mut self, target: impl Into<String>) -> Self {
        self.walk_target = target.into();
        self
    }

    /// Spoken line, if any.
    pub fn speaks(&self) -> Option<&str> {
        non_empty(&self.line)
    }

    /// Look target, if any.
    pub fn looks_at(&self) -> Option<&str> {
        non_empty(&self.look_target)
    }

    /// Walk target, if any.
    pub fn walks_to(&self) -> Option<&str> {
        non_empty(&self.walk_target)
    }

    /// True when no directive is set; such an action only paces playback.
    pub fn is_noop(&self) -> bool {
        self.speaks().is_none() && self.looks_at().is_none() && self.walks_to().is_none()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A scripted multi-actor episode.
///
/// # Examples
///
/// ```
/// use showrunner_core::Episode;
///
/// let episode: Episode = serde_json::from_str(
///     r#"{"episode_title": "Pilot", "location": "Studio", "script": []}"#,
/// ).unwrap();
/// assert_eq!(episode.title, "Pilot");
/// assert!(episode.script.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    #[serde(rename = "episode_title", default)]
    pub title: String,
    /// Location the episode takes place in
    #[serde(rename = "location", default)]
    pub location_id: String,
    /// Actions in execution order
    pub script: Vec<Action>,
}

/// Storage handle identifying one episode directory.
///
/// The handle is the episode's identity: two handles are the same episode
/// exactly when their paths are equal.
///
/// # Examples
///
/// ```
/// use showrunner_core::EpisodeHandle;
/// use std::path::Path;
///
/// let handle = EpisodeHandle::new("/queue/unreleased_episodes/ep2");
/// assert_eq!(handle.display_name(), "ep2");
/// assert_eq!(handle.script_path(), Path::new("/queue/unreleased_episodes/ep2/script.json"));
/// assert_eq!(handle.clip_path(3, "Ann"), Path::new("/queue/unreleased_episodes/ep2/3_Ann.wav"));
/// assert_eq!(handle.sidecar_path(), Path::new("/queue/unreleased_episodes/ep2.meta"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::From,
)]
#[serde(transparent)]
pub struct EpisodeHandle(PathBuf);

impl EpisodeHandle {
    /// Creates a handle from an episode directory path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Episode directory.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Final path component, used as the on-screen title.
    pub fn display_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Location of the episode script.
    pub fn script_path(&self) -> PathBuf {
        self.0.join(SCRIPT_FILE_NAME)
    }

    /// Location of the clip voicing action `index` for `actor`.
    pub fn clip_path(&self, index: usize, actor: &str) -> PathBuf {
        self.0.join(format!("{}_{}.wav", index, actor))
    }

    /// Sidecar metadata that travels with the episode directory.
    pub fn sidecar_path(&self) -> PathBuf {
        let mut sidecar = self.0.clone().into_os_string();
        sidecar.push(".meta");
        PathBuf::from(sidecar)
    }
}

impl fmt::Display for EpisodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
