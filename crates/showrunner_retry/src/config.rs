//! Retry delays per loop step.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Loop steps that are retried independently.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum RetryStep {
    /// Announcing the scene descriptor
    Registration,
    /// Fetching the next episode
    Fetch,
    /// Playing an episode
    Playback,
}

/// Delay before retrying each step.
///
/// Every step waits five seconds unless configured otherwise.
///
/// # Example
///
/// ```toml
/// [retry]
/// registration_delay_ms = 5000
/// fetch_delay_ms = 5000
/// playback_delay_ms = 5000
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct RetryConfig {
    /// Delay before re-registering the scene (milliseconds)
    #[serde(default = "default_delay_ms")]
    #[builder(default = "default_delay_ms()")]
    registration_delay_ms: u64,

    /// Delay before fetching again (milliseconds)
    #[serde(default = "default_delay_ms")]
    #[builder(default = "default_delay_ms()")]
    fetch_delay_ms: u64,

    /// Delay after a failed playback (milliseconds)
    #[serde(default = "default_delay_ms")]
    #[builder(default = "default_delay_ms()")]
    playback_delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    5000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            registration_delay_ms: default_delay_ms(),
            fetch_delay_ms: default_delay_ms(),
            playback_delay_ms: default_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// Creates a new retry config builder.
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    /// Delay configured for a step.
    pub fn delay_for(&self, step: RetryStep) -> Duration {
        let millis = match step {
            RetryStep::Registration => self.registration_delay_ms,
            RetryStep::Fetch => self.fetch_delay_ms,
            RetryStep::Playback => self.playback_delay_ms,
        };
        Duration::from_millis(millis)
    }
}
