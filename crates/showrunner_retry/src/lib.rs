//! Fixed-delay retry scheduling.
//!
//! Every step of the episode loop (scene registration, fetching the next
//! episode, playback) runs through [`RetryScheduler`]: on failure it waits a
//! fixed delay and tries the same step again, forever. Failures are assumed
//! to be transient (network blips, an empty queue).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod scheduler;

pub use config::{RetryConfig, RetryConfigBuilder, RetryStep};
pub use scheduler::{RetryScheduler, with_retry};
