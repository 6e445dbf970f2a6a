//! Voice clip playback with an explicit completion signal.

use async_trait::async_trait;
use showrunner_error::{PlaybackError, PlaybackErrorKind, ShowrunnerResult};
use std::path::Path;
use tokio::sync::oneshot;

/// Plays audio clips for one actor.
#[async_trait]
pub trait ClipPlayer: Send + Sync {
    /// Load `clip` and start playing it.
    ///
    /// Errors mean the clip could not be loaded. Once playback has started
    /// the returned [`ClipCompletion`] resolves when it ends.
    async fn play(&self, clip: &Path) -> ShowrunnerResult<ClipCompletion>;
}

/// Resolves when a started clip stops playing.
///
/// # Examples
///
/// ```
/// use showrunner_interface::ClipCompletion;
///
/// # async fn example() {
/// let (finished, completion) = ClipCompletion::channel();
/// finished.finish();
/// assert!(completion.wait().await.is_ok());
/// # }
/// ```
#[derive(Debug)]
pub struct ClipCompletion {
    rx: Option<oneshot::Receiver<Result<(), String>>>,
}

/// Sending half held by the audio subsystem.
///
/// Dropping it without calling [`finish`](ClipFinished::finish) counts as a
/// failed playback.
#[derive(Debug)]
pub struct ClipFinished {
    tx: oneshot::Sender<Result<(), String>>,
}

impl ClipCompletion {
    /// A connected completion pair.
    pub fn channel() -> (ClipFinished, ClipCompletion) {
        let (tx, rx) = oneshot::channel();
        (ClipFinished { tx }, ClipCompletion { rx: Some(rx) })
    }

    /// A completion that is already resolved.
    pub fn finished() -> Self {
        Self { rx: None }
    }

    /// Wait until playback ends.
    pub async fn wait(self) -> ShowrunnerResult<()> {
        let Some(rx) = self.rx else {
            return Ok(());
        };

        match rx.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(message)) => Err(PlaybackError::new(PlaybackErrorKind::ClipFailed(message)).into()),
            Err(_) => Err(PlaybackError::new(PlaybackErrorKind::ClipFailed(
                "player dropped before the clip finished".to_string(),
            ))
            .into()),
        }
    }
}

impl ClipFinished {
    /// Signal that the clip played to the end.
    pub fn finish(self) {
        // The sequencer may have stopped waiting; nothing to report then.
        let _ = self.tx.send(Ok(()));
    }

    /// Signal that playback stopped early.
    pub fn fail(self, message: impl Into<String>) {
        let _ = self.tx.send(Err(message.into()));
    }
}
