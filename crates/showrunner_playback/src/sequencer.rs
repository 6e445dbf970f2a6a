//! Script sequencing.
//!
//! Every action runs to completion before the next one starts:
//!
//! 1. look at the look target, if set and resolvable
//! 2. start walking toward the walk target (arrival is not awaited)
//! 3. caption and play the voice line, waiting for the clip to end
//! 4. hold through the settle delay if the action walked or spoke
//! 5. wait the reset delay and return the actor to idle
//!
//! Problems with a single action (unknown actor, missing target or clip,
//! failed audio) are logged and playback moves on. Only an unreadable or
//! unparsable script fails the whole episode.

use showrunner_core::{Action, ActorState, CAMERA_TARGET, Episode, EpisodeHandle, PlaybackTiming};
use showrunner_error::{PlaybackError, PlaybackErrorKind, ShowrunnerResult};
use showrunner_interface::{ActorRegistry, Animator, ClipPlayer, Movement, StatusDisplay};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Read and parse an episode's script.
///
/// # Errors
///
/// - `PlaybackErrorKind::NotFound` if there is no script
/// - `PlaybackErrorKind::Unreadable` if the script exists but reading it failed
/// - `PlaybackErrorKind::Malformed` if it is not a valid episode
#[instrument(skip(handle), fields(episode = %handle))]
pub async fn load_episode(handle: &EpisodeHandle) -> ShowrunnerResult<Episode> {
    let path = handle.script_path();
    let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
        let detail = format!("{}: {}", path.display(), e);
        PlaybackError::new(match e.kind() {
            std::io::ErrorKind::NotFound => PlaybackErrorKind::NotFound(detail),
            _ => PlaybackErrorKind::Unreadable(detail),
        })
    })?;

    let episode: Episode = serde_json::from_str(&content).map_err(|e| {
        PlaybackError::new(PlaybackErrorKind::Malformed(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    debug!(actions = episode.script.len(), "Loaded episode script");
    Ok(episode)
}

/// Plays episodes against the injected actors and display.
#[derive(Clone)]
pub struct EpisodeSequencer {
    registry: Arc<dyn ActorRegistry>,
    display: Arc<dyn StatusDisplay>,
    timing: PlaybackTiming,
}

impl std::fmt::Debug for EpisodeSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpisodeSequencer")
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

/// Capabilities an actor needs before the sequencer will drive it.
struct Cast<'a> {
    movement: &'a dyn Movement,
    voice: &'a dyn ClipPlayer,
    animator: &'a dyn Animator,
}

impl EpisodeSequencer {
    /// Create a sequencer.
    pub fn new(
        registry: Arc<dyn ActorRegistry>,
        display: Arc<dyn StatusDisplay>,
        timing: PlaybackTiming,
    ) -> Self {
        Self {
            registry,
            display,
            timing,
        }
    }

    /// Pacing in effect.
    pub fn timing(&self) -> &PlaybackTiming {
        &self.timing
    }

    /// Play one episode from start to finish.
    ///
    /// The script is loaded and parsed before any actor receives a command.
    ///
    /// # Errors
    ///
    /// Only load failures, see [`load_episode`].
    #[instrument(skip(self, handle), fields(episode = %handle))]
    pub async fn play(&self, handle: &EpisodeHandle) -> ShowrunnerResult<()> {
        let episode = load_episode(handle).await?;

        self.display.show_title(&handle.display_name());
        info!(
            title = %episode.title,
            actions = episode.script.len(),
            "Playing episode"
        );

        for (index, action) in episode.script.iter().enumerate() {
            self.perform(handle, index, action).await;
        }

        info!("Episode finished");
        Ok(())
    }

    #[instrument(skip(self, handle, action), fields(actor = %action.actor))]
    async fn perform(&self, handle: &EpisodeHandle, index: usize, action: &Action) {
        let Some(actor) = self.registry.resolve_actor(&action.actor) else {
            warn!("Unknown actor, skipping action");
            return;
        };
        let (Some(movement), Some(voice), Some(animator)) =
            (actor.movement(), actor.voice(), actor.animator())
        else {
            warn!("Actor lacks movement, voice or animation, skipping action");
            return;
        };
        let cast = Cast {
            movement,
            voice,
            animator,
        };

        let mut state = ActorState::idle();

        if let Some(look) = action.looks_at() {
            self.look(&cast, look);
        }

        if let Some(walk) = action.walks_to() {
            match self.registry.resolve_target(walk) {
                Some(target) => {
                    state.start_walking();
                    cast.animator.apply(state);
                    cast.movement.move_to(target.position);
                }
                None => warn!(target = %walk, "Walk target not found"),
            }
        }

        if let Some(line) = action.speaks() {
            state.start_talking();
            cast.animator.apply(state);
            self.display.show_caption(&format!("{}: {}", action.actor, line));
            self.speak(&cast, handle, index, &action.actor).await;
        }

        if action.walks_to().is_some() || action.speaks().is_some() {
            state.settle();
            cast.animator.apply(state);
            tokio::time::sleep(self.timing.settle_delay()).await;
        }

        tokio::time::sleep(self.timing.reset_delay()).await;
        state.reset();
        cast.animator.apply(state);
    }

    fn look(&self, cast: &Cast<'_>, name: &str) {
        let Some(target) = self.registry.resolve_target(name) else {
            warn!(target = %name, "Look target not found");
            return;
        };

        let point = if name.eq_ignore_ascii_case(CAMERA_TARGET) {
            target.position.lowered(*self.timing.camera_look_offset())
        } else {
            target.position
        };
        cast.movement.look_at(point);
    }

    /// Play the action's clip and wait for it. Failures count as an instant finish.
    async fn speak(&self, cast: &Cast<'_>, handle: &EpisodeHandle, index: usize, actor: &str) {
        let clip = handle.clip_path(index, actor);

        if !tokio::fs::try_exists(&clip).await.unwrap_or(false) {
            let err = PlaybackError::new(PlaybackErrorKind::MissingResource(
                clip.display().to_string(),
            ));
            warn!(error = %err, "Voice clip missing");
            return;
        }

        let completion = match cast.voice.play(&clip).await {
            Ok(completion) => completion,
            Err(e) => {
                warn!(clip = %clip.display(), error = %e, "Could not start voice clip");
                return;
            }
        };

        if let Err(e) = completion.wait().await {
            warn!(clip = %clip.display(), error = %e, "Voice clip did not finish");
        }
    }
}
