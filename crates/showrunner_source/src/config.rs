//! Episode source selection and settings.

use crate::{DirectoryEpisodeSource, EpisodeQueue, RemoteEpisodeSource};
use serde::{Deserialize, Serialize};
use showrunner_error::ShowrunnerResult;
use std::path::PathBuf;
use std::time::Duration;

/// Which source strategy to run, tagged by `kind`.
///
/// # Example
///
/// ```toml
/// [source]
/// kind = "remote"
/// base_url = "http://localhost:5000"
/// request_timeout_secs = 30
///
/// # or
///
/// [source]
/// kind = "directory"
/// root = "/srv/episodes"
/// write_scene_manifest = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// HTTP episode service
    Remote(RemoteConfig),
    /// Local layered directory queue
    Directory(DirectoryConfig),
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Remote(RemoteConfig::default())
    }
}

impl SourceConfig {
    /// Construct the configured source.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn build(&self) -> ShowrunnerResult<EpisodeQueue> {
        match self {
            Self::Remote(config) => Ok(EpisodeQueue::Remote(RemoteEpisodeSource::new(
                config.clone(),
            )?)),
            Self::Directory(config) => Ok(EpisodeQueue::Directory(
                DirectoryEpisodeSource::from_config(config),
            )),
        }
    }
}

/// Settings for [`RemoteEpisodeSource`].
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RemoteConfig {
    /// Base URL of the episode service
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_request_timeout_secs")]
    #[builder(default = "default_request_timeout_secs()")]
    request_timeout_secs: u64,

    /// Local directory the service's episode paths live under.
    ///
    /// When set, played episodes are archived into
    /// `{mirror_root}/released_episodes`; otherwise the service owns
    /// retirement and retire is a no-op.
    #[serde(default)]
    #[builder(default)]
    mirror_root: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            mirror_root: None,
        }
    }
}

impl RemoteConfig {
    /// Creates a new remote config builder.
    pub fn builder() -> RemoteConfigBuilder {
        RemoteConfigBuilder::default()
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Settings for [`DirectoryEpisodeSource`].
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct DirectoryConfig {
    /// Queue root containing the tier directories
    root: PathBuf,

    /// Write `supported_scenes.json` into the root on registration
    #[serde(default)]
    #[builder(default)]
    write_scene_manifest: bool,
}

impl DirectoryConfig {
    /// Creates a new directory config builder.
    pub fn builder() -> DirectoryConfigBuilder {
        DirectoryConfigBuilder::default()
    }
}
