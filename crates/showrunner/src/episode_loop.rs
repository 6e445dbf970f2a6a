//! The acquire, play and retire loop.

use crate::{RejectedEpisodes, ShowrunnerConfig};
use showrunner_core::{EpisodeHandle, SceneDescriptor};
use showrunner_error::{ConfigError, ShowrunnerError, ShowrunnerResult, SourceError, SourceErrorKind};
use showrunner_interface::{
    ActorRegistry, EpisodeLifecycle, EpisodeSource, SceneEnvironment, StatusDisplay,
};
use showrunner_playback::{EpisodeSequencer, SceneCatalog};
use showrunner_retry::{RetryScheduler, RetryStep};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Caption shown while the next episode is requested.
pub const GENERATING_CAPTION: &str = "...Generating";

/// Caption shown while the source has nothing to hand out.
pub const WAITING_CAPTION: &str = "Waiting for episodes...";

/// Title shown between episodes.
pub const PLACEHOLDER_TITLE: &str = "...";

/// How one pass through the loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// The episode played through and was retired
    Played(EpisodeHandle),
    /// The episode could not be loaded and was retired unplayed
    Rejected(EpisodeHandle),
}

impl EpisodeOutcome {
    /// The episode this pass consumed.
    pub fn episode(&self) -> &EpisodeHandle {
        match self {
            Self::Played(episode) | Self::Rejected(episode) => episode,
        }
    }
}

/// Drives episodes from a source through the sequencer, forever.
///
/// ```text
/// SceneCatalog ─▶ register ─▶ loop { next ─▶ play ─▶ retire }
/// ```
///
/// Every step runs under the [`RetryScheduler`] with its own delay, so a
/// failing network or an empty queue only ever slows the loop down.
///
/// # Example
///
/// ```rust,ignore
/// let episode_loop = EpisodeLoop::builder()
///     .source(queue.clone())
///     .lifecycle(queue)
///     .sequencer(EpisodeSequencer::new(registry, display.clone(), timing))
///     .environment(environment)
///     .display(display)
///     .build()?;
///
/// tokio::spawn(async move { episode_loop.run().await });
/// ```
#[derive(Clone, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct EpisodeLoop {
    /// Where episodes come from
    source: Arc<dyn EpisodeSource>,
    /// What happens to them afterwards
    lifecycle: Arc<dyn EpisodeLifecycle>,
    /// Plays one episode
    sequencer: EpisodeSequencer,
    /// Rosters the scene descriptor is built from
    environment: Arc<dyn SceneEnvironment>,
    /// Status texts between episodes
    display: Arc<dyn StatusDisplay>,
    /// Per-step retry delays
    #[builder(default)]
    retry: RetryScheduler,
}

impl std::fmt::Debug for EpisodeLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpisodeLoop")
            .field("source", &self.source.source_name())
            .field("sequencer", &self.sequencer)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl EpisodeLoop {
    /// Creates a new loop builder.
    pub fn builder() -> EpisodeLoopBuilder {
        EpisodeLoopBuilder::default()
    }

    /// Wire a loop from configuration and the host's collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured source cannot be constructed.
    pub fn from_config(
        config: &ShowrunnerConfig,
        registry: Arc<dyn ActorRegistry>,
        environment: Arc<dyn SceneEnvironment>,
        display: Arc<dyn StatusDisplay>,
    ) -> ShowrunnerResult<Self> {
        let queue = Arc::new(config.source.build()?);
        let sequencer = EpisodeSequencer::new(registry, display.clone(), config.playback.clone());

        Self::builder()
            .source(queue.clone())
            .lifecycle(queue)
            .sequencer(sequencer)
            .environment(environment)
            .display(display)
            .retry(RetryScheduler::new(config.retry.clone()))
            .build()
            .map_err(|e| {
                ShowrunnerError::from(ConfigError::new(
                    "episode loop",
                    format!("Failed to assemble episode loop: {}", e),
                ))
            })
    }

    /// Run forever.
    ///
    /// Registers the scene once, then acquires, plays and retires episodes
    /// without end. The returned future never resolves; drop it to stop.
    #[instrument(skip(self), fields(source = self.source.source_name()))]
    pub async fn run(&self) -> Infallible {
        info!("Episode loop starting");
        if let Err(e) = self.register().await {
            error!(error = %e, "Scene registration abandoned");
        }

        let mut rejected = RejectedEpisodes::default();
        loop {
            if let Err(e) = self.run_once(&mut rejected).await {
                error!(error = %e, "Could not acquire an episode");
                tokio::time::sleep(self.retry.config().delay_for(RetryStep::Fetch)).await;
            }
        }
    }

    /// Build the scene descriptor and announce it, retrying until accepted.
    ///
    /// # Errors
    ///
    /// Only errors the registration step cannot recover from by retrying.
    #[instrument(skip(self))]
    pub async fn register(&self) -> ShowrunnerResult<SceneDescriptor> {
        let descriptor = SceneCatalog::build(self.environment.as_ref());
        if descriptor.is_empty() {
            warn!("Scene has no actors");
        }

        self.retry
            .run(RetryStep::Registration, || {
                let descriptor = &descriptor;
                async move { self.source.register(descriptor).await }
            })
            .await?;

        info!(actors = descriptor.actors().len(), "Scene registered");
        Ok(descriptor)
    }

    /// One pass: acquire an episode, play it and retire it.
    ///
    /// An episode that cannot be loaded is retired unplayed and added to
    /// `rejected`. While the source keeps handing out remembered episodes it
    /// counts as having nothing available.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails in a way retrying cannot cure;
    /// nothing was played or retired.
    #[instrument(skip(self, rejected), fields(rejected = rejected.len()))]
    pub async fn run_once(
        &self,
        rejected: &mut RejectedEpisodes,
    ) -> ShowrunnerResult<EpisodeOutcome> {
        let episode = self.acquire(rejected).await?;
        let outcome = self.play(episode).await;
        self.retire(outcome.episode()).await;

        if let EpisodeOutcome::Rejected(episode) = &outcome {
            rejected.insert(episode.clone());
        }
        Ok(outcome)
    }

    async fn acquire(&self, rejected: &RejectedEpisodes) -> ShowrunnerResult<EpisodeHandle> {
        self.display.show_caption(GENERATING_CAPTION);
        self.display.show_title(PLACEHOLDER_TITLE);

        self.retry
            .run(RetryStep::Fetch, || async move {
                let result = match self.source.next().await {
                    Ok(episode) if rejected.contains(&episode) => {
                        debug!(episode = %episode, "Source returned a rejected episode");
                        Err(SourceError::new(SourceErrorKind::NotAvailable).into())
                    }
                    other => other,
                };

                if let Err(e) = &result
                    && e.is_not_available()
                {
                    self.display.show_caption(WAITING_CAPTION);
                    self.display.show_title(PLACEHOLDER_TITLE);
                }
                result
            })
            .await
    }

    async fn play(&self, episode: EpisodeHandle) -> EpisodeOutcome {
        let result = self
            .retry
            .run(RetryStep::Playback, || self.sequencer.play(&episode))
            .await;

        match result {
            Ok(()) => EpisodeOutcome::Played(episode),
            Err(e) => {
                warn!(episode = %episode, error = %e, "Skipping unplayable episode");
                EpisodeOutcome::Rejected(episode)
            }
        }
    }

    async fn retire(&self, episode: &EpisodeHandle) {
        match self.lifecycle.retire(episode).await {
            Ok(()) => debug!(episode = %episode, "Episode retired"),
            Err(e) => error!(episode = %episode, error = %e, "Could not retire episode"),
        }
    }
}
