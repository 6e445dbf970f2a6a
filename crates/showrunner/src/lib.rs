//! Showrunner: a self-healing loop that plays scripted multi-actor episodes.
//!
//! A host application (a game engine, a renderer, a test harness) supplies
//! its actors, a clip player and somewhere to show text. Showrunner decides
//! which episode runs next, turns its script into timed actor commands and
//! retires it afterwards, retrying every step after a fixed delay.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use showrunner::{EpisodeLoop, ShowrunnerConfig, TracingStatusDisplay, init_telemetry};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     init_telemetry(false)?;
//!
//!     let config = ShowrunnerConfig::load()?;
//!     let episode_loop = EpisodeLoop::from_config(
//!         &config,
//!         Arc::new(MyStage::new()),
//!         Arc::new(MyEnvironment::new()),
//!         Arc::new(TracingStatusDisplay),
//!     )?;
//!
//!     match episode_loop.run().await {}
//! }
//! ```
//!
//! # Architecture
//!
//! Showrunner is organized as a workspace with focused crates:
//!
//! - `showrunner_error` - Error types
//! - `showrunner_core` - Scene descriptor, episode script, actor state, queue tiers
//! - `showrunner_interface` - Collaborator traits
//! - `showrunner_retry` - Fixed-delay retry scheduling
//! - `showrunner_source` - Remote and directory episode sources, retirement
//! - `showrunner_playback` - Scene cataloguing and episode sequencing
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod display;
mod episode_loop;
mod rejected;
mod telemetry;

pub use config::ShowrunnerConfig;
pub use display::TracingStatusDisplay;
pub use episode_loop::{
    EpisodeLoop, EpisodeLoopBuilder, EpisodeOutcome, GENERATING_CAPTION, PLACEHOLDER_TITLE,
    WAITING_CAPTION,
};
pub use rejected::{REJECTED_MEMORY, RejectedEpisodes};
pub use telemetry::{init_console_telemetry, init_telemetry};

pub use showrunner_core::*;
pub use showrunner_error::*;
pub use showrunner_interface::*;
pub use showrunner_playback::{EpisodeSequencer, SceneCatalog, load_episode};
pub use showrunner_retry::{RetryConfig, RetryConfigBuilder, RetryScheduler, RetryStep, with_retry};
pub use showrunner_source::{
    DirectoryConfig, DirectoryConfigBuilder, DirectoryEpisodeSource, EpisodeQueue,
    ReleaseArchive, RemoteConfig, RemoteConfigBuilder, RemoteEpisodeSource, SourceConfig,
};
