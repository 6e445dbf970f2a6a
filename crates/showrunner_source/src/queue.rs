//! Runtime-selected episode source.

use crate::{DirectoryEpisodeSource, RemoteEpisodeSource};
use async_trait::async_trait;
use showrunner_core::{EpisodeHandle, SceneDescriptor};
use showrunner_error::ShowrunnerResult;
use showrunner_interface::{EpisodeLifecycle, EpisodeSource};

/// Either source strategy, chosen from configuration.
#[derive(Debug, Clone)]
pub enum EpisodeQueue {
    /// HTTP episode service
    Remote(RemoteEpisodeSource),
    /// Local layered directory queue
    Directory(DirectoryEpisodeSource),
}

impl From<RemoteEpisodeSource> for EpisodeQueue {
    fn from(source: RemoteEpisodeSource) -> Self {
        Self::Remote(source)
    }
}

impl From<DirectoryEpisodeSource> for EpisodeQueue {
    fn from(source: DirectoryEpisodeSource) -> Self {
        Self::Directory(source)
    }
}

#[async_trait]
impl EpisodeSource for EpisodeQueue {
    async fn register(&self, descriptor: &SceneDescriptor) -> ShowrunnerResult<()> {
        match self {
            Self::Remote(source) => source.register(descriptor).await,
            Self::Directory(source) => source.register(descriptor).await,
        }
    }

    async fn next(&self) -> ShowrunnerResult<EpisodeHandle> {
        match self {
            Self::Remote(source) => source.next().await,
            Self::Directory(source) => source.next().await,
        }
    }

    fn source_name(&self) -> &'static str {
        match self {
            Self::Remote(source) => source.source_name(),
            Self::Directory(source) => source.source_name(),
        }
    }
}

#[async_trait]
impl EpisodeLifecycle for EpisodeQueue {
    async fn retire(&self, episode: &EpisodeHandle) -> ShowrunnerResult<()> {
        match self {
            Self::Remote(source) => source.retire(episode).await,
            Self::Directory(source) => source.retire(episode).await,
        }
    }
}
