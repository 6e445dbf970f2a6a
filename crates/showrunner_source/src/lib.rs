//! Episode sources and retirement.
//!
//! Two interchangeable strategies decide where the next episode comes from:
//!
//! - [`RemoteEpisodeSource`] asks an HTTP service for the next episode path
//! - [`DirectoryEpisodeSource`] scans a layered directory queue
//!   (prioritized → unreleased → released)
//!
//! Both implement [`EpisodeSource`](showrunner_interface::EpisodeSource) and
//! [`EpisodeLifecycle`](showrunner_interface::EpisodeLifecycle). Retirement
//! moves a played episode into the released tier and deletes it outright when
//! the move fails, so a consumed episode is never handed out again as-is.
//!
//! # Example
//!
//! ```rust,no_run
//! use showrunner_interface::{EpisodeLifecycle, EpisodeSource};
//! use showrunner_source::DirectoryEpisodeSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let queue = DirectoryEpisodeSource::new("/srv/episodes");
//! let episode = queue.next().await?;
//! // ... play it ...
//! queue.retire(&episode).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod config;
mod directory;
mod queue;
mod remote;

pub use archive::ReleaseArchive;
pub use config::{DirectoryConfig, DirectoryConfigBuilder, RemoteConfig, RemoteConfigBuilder, SourceConfig};
pub use directory::{DirectoryEpisodeSource, SCENE_MANIFEST_FILE_NAME};
pub use queue::EpisodeQueue;
pub use remote::{EPISODE_PATH_ROUTE, EpisodePathResponse, RemoteEpisodeSource, SUPPORTED_SCENES_ROUTE};
