//! Playback pacing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed delays applied between scripted actions.
///
/// # Examples
///
/// ```
/// use showrunner_core::PlaybackTiming;
/// use std::time::Duration;
///
/// let timing = PlaybackTiming::default();
/// assert_eq!(timing.settle_delay(), Duration::from_secs(2));
/// assert_eq!(timing.reset_delay(), Duration::from_millis(500));
///
/// let fast = PlaybackTiming::builder().settle_delay_ms(10u64).build().unwrap();
/// assert_eq!(fast.settle_delay(), Duration::from_millis(10));
/// assert_eq!(*fast.reset_delay_ms(), 500);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(deny_unknown_fields)]
pub struct PlaybackTiming {
    /// Pause after an action that walked or spoke (milliseconds).
    #[serde(default = "default_settle_delay_ms")]
    #[builder(default = "default_settle_delay_ms()")]
    settle_delay_ms: u64,

    /// Pause before flags are reset after every action (milliseconds).
    #[serde(default = "default_reset_delay_ms")]
    #[builder(default = "default_reset_delay_ms()")]
    reset_delay_ms: u64,

    /// How far below the camera an actor aims when looking at it.
    #[serde(default = "default_camera_look_offset")]
    #[builder(default = "default_camera_look_offset()")]
    camera_look_offset: f32,
}

fn default_settle_delay_ms() -> u64 {
    2000
}

fn default_reset_delay_ms() -> u64 {
    500
}

fn default_camera_look_offset() -> f32 {
    0.5
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            reset_delay_ms: default_reset_delay_ms(),
            camera_look_offset: default_camera_look_offset(),
        }
    }
}

impl PlaybackTiming {
    /// Creates a new timing builder.
    pub fn builder() -> PlaybackTimingBuilder {
        PlaybackTimingBuilder::default()
    }

    /// Settle delay as a duration.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Reset delay as a duration.
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}
