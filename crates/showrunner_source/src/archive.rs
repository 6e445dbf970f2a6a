//! Retirement of played episodes into the released tier.

use showrunner_core::{EpisodeHandle, QueueTier};
use showrunner_error::{RetireError, RetireErrorKind, ShowrunnerResult};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Moves consumed episodes into a released directory.
///
/// Retirement never leaves an episode where it was: if the move fails for
/// any reason (destination taken, episode already released, cross-device
/// rename) the episode directory and its `.meta` sidecar are deleted instead.
/// Losing an episode is preferred over playing it twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseArchive {
    released_dir: PathBuf,
}

impl ReleaseArchive {
    /// Archive into `released_dir` directly.
    pub fn new(released_dir: impl Into<PathBuf>) -> Self {
        Self {
            released_dir: released_dir.into(),
        }
    }

    /// Archive into the released tier of a queue root.
    pub fn under_root(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(QueueTier::Released.dir_name()))
    }

    /// Directory episodes are archived into.
    pub fn released_dir(&self) -> &Path {
        &self.released_dir
    }

    /// Where an episode lands once archived.
    pub fn destination_for(&self, episode: &EpisodeHandle) -> PathBuf {
        self.released_dir.join(episode.display_name())
    }

    /// Archive the episode, falling back to deleting it.
    ///
    /// # Errors
    ///
    /// Only when the move failed and the deletion failed too.
    #[instrument(skip(self), fields(episode = %episode))]
    pub async fn retire(&self, episode: &EpisodeHandle) -> ShowrunnerResult<()> {
        match self.archive(episode).await {
            Ok(destination) => {
                info!(destination = %destination.display(), "Episode released");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Could not archive episode, deleting it instead");
                self.delete(episode).await
            }
        }
    }

    async fn archive(&self, episode: &EpisodeHandle) -> Result<PathBuf, RetireError> {
        if episode.display_name().is_empty() {
            return Err(RetireError::new(RetireErrorKind::Move(format!(
                "{} has no directory name",
                episode
            ))));
        }

        let destination = self.destination_for(episode);

        tokio::fs::create_dir_all(&self.released_dir)
            .await
            .map_err(|e| {
                RetireError::new(RetireErrorKind::Move(format!(
                    "{}: {}",
                    self.released_dir.display(),
                    e
                )))
            })?;

        // rename() would happily replace an empty directory or no-op on the same path.
        if tokio::fs::try_exists(&destination).await.unwrap_or(true) {
            return Err(RetireError::new(RetireErrorKind::Move(format!(
                "{} already exists",
                destination.display()
            ))));
        }

        tokio::fs::rename(episode.path(), &destination)
            .await
            .map_err(|e| {
                RetireError::new(RetireErrorKind::Move(format!(
                    "rename {} to {}: {}",
                    episode,
                    destination.display(),
                    e
                )))
            })?;

        let sidecar = episode.sidecar_path();
        if exists(&sidecar).await {
            let sidecar_destination = EpisodeHandle::new(destination.clone()).sidecar_path();
            if let Err(e) = tokio::fs::rename(&sidecar, &sidecar_destination).await {
                warn!(
                    sidecar = %sidecar.display(),
                    error = %e,
                    "Could not archive sidecar, deleting it"
                );
                if let Err(e) = remove_any(&sidecar).await {
                    warn!(sidecar = %sidecar.display(), error = %e, "Could not delete sidecar");
                }
            }
        }

        Ok(destination)
    }

    async fn delete(&self, episode: &EpisodeHandle) -> ShowrunnerResult<()> {
        match remove_any(episode.path()).await {
            Ok(()) => info!("Episode deleted"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Episode already gone");
            }
            Err(e) => {
                return Err(RetireError::new(RetireErrorKind::Delete(format!(
                    "{}: {}",
                    episode, e
                )))
                .into());
            }
        }

        let sidecar = episode.sidecar_path();
        if exists(&sidecar).await
            && let Err(e) = remove_any(&sidecar).await
        {
            warn!(sidecar = %sidecar.display(), error = %e, "Could not delete sidecar");
        }

        Ok(())
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Remove a file or a whole directory tree.
async fn remove_any(path: &Path) -> io::Result<()> {
    let metadata = tokio::fs::symlink_metadata(path).await?;
    if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    }
}
