//! Layered directory queue.

use crate::{DirectoryConfig, ReleaseArchive};
use async_trait::async_trait;
use showrunner_core::{EpisodeHandle, QueueTier, SceneDescriptor};
use showrunner_error::{JsonError, ShowrunnerResult, SourceError, SourceErrorKind};
use showrunner_interface::{EpisodeLifecycle, EpisodeSource};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// File the scene descriptor is written to when the manifest is enabled.
pub const SCENE_MANIFEST_FILE_NAME: &str = "supported_scenes.json";

/// Episode source backed by tier directories under one root.
///
/// ```text
/// {root}/
/// ├── prioritized_episodes/
/// ├── unreleased_episodes/
/// │   └── ep2/
/// │       ├── script.json
/// │       └── 0_Ann.wav
/// └── released_episodes/
///     ├── ep1/
///     └── ep1.meta
/// ```
///
/// The first subdirectory of the first non-empty tier is the next episode.
/// Released episodes are replayed once the other tiers run dry.
#[derive(Debug, Clone)]
pub struct DirectoryEpisodeSource {
    root: PathBuf,
    write_scene_manifest: bool,
    archive: ReleaseArchive,
}

impl DirectoryEpisodeSource {
    /// Queue rooted at `root`. Tier directories need not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let archive = ReleaseArchive::under_root(&root);
        Self {
            root,
            write_scene_manifest: false,
            archive,
        }
    }

    /// Queue built from settings.
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(config.root().clone()).with_scene_manifest(*config.write_scene_manifest())
    }

    /// Write the scene descriptor to [`SCENE_MANIFEST_FILE_NAME`] on registration.
    pub fn with_scene_manifest(mut self, enabled: bool) -> Self {
        self.write_scene_manifest = enabled;
        self
    }

    /// Queue root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a tier under the root.
    pub fn tier_dir(&self, tier: QueueTier) -> PathBuf {
        self.root.join(tier.dir_name())
    }

    /// First episode directory in a tier, if any.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn first_in_tier(&self, tier: QueueTier) -> ShowrunnerResult<Option<EpisodeHandle>> {
        let dir = self.tier_dir(tier);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(dir = %dir.display(), "Tier directory missing, treating as empty");
                return Ok(None);
            }
            Err(e) => return Err(queue_access(&dir, e).into()),
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| queue_access(&dir, e))?
        {
            let is_dir = entry
                .file_type()
                .await
                .map(|kind| kind.is_dir())
                .unwrap_or(false);
            if is_dir {
                return Ok(Some(EpisodeHandle::new(entry.path())));
            }
        }

        Ok(None)
    }
}

fn queue_access(path: &Path, e: io::Error) -> SourceError {
    SourceError::new(SourceErrorKind::QueueAccess(format!(
        "{}: {}",
        path.display(),
        e
    )))
}

#[async_trait]
impl EpisodeSource for DirectoryEpisodeSource {
    #[instrument(skip(self, descriptor), fields(root = %self.root.display(), actors = descriptor.actors().len()))]
    async fn register(&self, descriptor: &SceneDescriptor) -> ShowrunnerResult<()> {
        if !self.write_scene_manifest {
            debug!("Scene manifest disabled, nothing to register");
            return Ok(());
        }

        let path = self.root.join(SCENE_MANIFEST_FILE_NAME);
        let json = serde_json::to_string_pretty(descriptor)
            .map_err(|e| JsonError::new(SCENE_MANIFEST_FILE_NAME, format!("Failed to serialize scene: {}", e)))?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| queue_access(&self.root, e))?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| queue_access(&path, e))?;

        info!(path = %path.display(), "Wrote scene manifest");
        Ok(())
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn next(&self) -> ShowrunnerResult<EpisodeHandle> {
        for tier in QueueTier::by_precedence() {
            if let Some(episode) = self.first_in_tier(tier).await? {
                debug!(%tier, episode = %episode, "Selected episode");
                return Ok(episode);
            }
        }

        Err(SourceError::new(SourceErrorKind::NotAvailable).into())
    }

    fn source_name(&self) -> &'static str {
        "directory"
    }
}

#[async_trait]
impl EpisodeLifecycle for DirectoryEpisodeSource {
    async fn retire(&self, episode: &EpisodeHandle) -> ShowrunnerResult<()> {
        self.archive.retire(episode).await
    }
}
