//! Trait definitions for the showrunner episode playback loop.
//!
//! The loop itself only sequences work; everything it talks to sits behind
//! one of these traits:
//! - [`EpisodeSource`] and [`EpisodeLifecycle`] decide which episode runs and
//!   what happens to it afterwards
//! - [`ActorRegistry`], [`Actor`] and its capability traits receive commands
//! - [`ClipPlayer`] plays voice clips and signals completion
//! - [`StatusDisplay`] shows titles, captions and waiting texts
//! - [`SceneEnvironment`] exposes the rosters the scene descriptor is built from

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod clip;
mod source;

pub use actor::{Actor, ActorRegistry, Animator, Movement, SceneEnvironment, StatusDisplay, Target};
pub use clip::{ClipCompletion, ClipFinished, ClipPlayer};
pub use source::{EpisodeLifecycle, EpisodeSource};
