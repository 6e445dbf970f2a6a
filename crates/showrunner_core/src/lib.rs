//! Core data types for the showrunner episode playback loop.
//!
//! This crate provides the data model shared by every other crate: the scene
//! descriptor sent to the episode source, the episode script format, the
//! per-actor animation state, and the queue tiers of the directory source.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod episode;
mod scene;
mod tier;
mod timing;

pub use actor::{ActorState, Position};
pub use episode::{Action, Episode, EpisodeHandle, SCRIPT_FILE_NAME};
pub use scene::{CAMERA_TARGET, Location, SceneDescriptor, SceneDescriptorBuilder};
pub use tier::QueueTier;
pub use timing::{PlaybackTiming, PlaybackTimingBuilder};
