//! Episode acquisition and retirement traits.

use async_trait::async_trait;
use showrunner_core::{EpisodeHandle, SceneDescriptor};
use showrunner_error::ShowrunnerResult;

/// Where the next episode comes from.
///
/// Discovery is side-effect free: calling [`next`](EpisodeSource::next)
/// repeatedly without retiring anything returns the same episode, so the
/// loop may re-call it after any failure.
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    /// Announce this client's scene to the source.
    ///
    /// Called once at startup, retried until it succeeds.
    async fn register(&self, descriptor: &SceneDescriptor) -> ShowrunnerResult<()>;

    /// Handle of one unconsumed episode.
    ///
    /// Returns a `SourceErrorKind::NotAvailable` error when there is no work.
    async fn next(&self) -> ShowrunnerResult<EpisodeHandle>;

    /// Source name for logging (e.g., "remote", "directory").
    fn source_name(&self) -> &'static str;
}

/// Terminal transition of a consumed episode.
#[async_trait]
pub trait EpisodeLifecycle: Send + Sync {
    /// Archive or delete the episode so it is never handed out again as-is.
    async fn retire(&self, episode: &EpisodeHandle) -> ShowrunnerResult<()>;
}
