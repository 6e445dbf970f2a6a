//! Scene cataloguing and episode playback.
//!
//! [`SceneCatalog`] turns the live environment into the descriptor sent to the
//! episode source. [`EpisodeSequencer`] turns an episode script into a
//! time-ordered series of actor commands, waiting on voice clips and fixed
//! delays between them.
//!
//! # Example
//!
//! ```rust,ignore
//! use showrunner_core::{EpisodeHandle, PlaybackTiming};
//! use showrunner_playback::EpisodeSequencer;
//!
//! let sequencer = EpisodeSequencer::new(registry, display, PlaybackTiming::default());
//! sequencer.play(&EpisodeHandle::new("/srv/episodes/unreleased_episodes/ep2")).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod sequencer;

pub use catalog::SceneCatalog;
pub use sequencer::{EpisodeSequencer, load_episode};
