//! Memory of episodes the loop refused to play.

use showrunner_core::EpisodeHandle;
use std::collections::VecDeque;

/// How many rejected episodes a loop remembers by default.
pub const REJECTED_MEMORY: usize = 64;

/// Bounded set of recently rejected episodes, oldest evicted first.
///
/// A source that keeps serving any remembered episode is treated as having
/// nothing available, so the loop waits the fetch delay instead of
/// rejecting the same handles back to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEpisodes {
    capacity: usize,
    episodes: VecDeque<EpisodeHandle>,
}

impl Default for RejectedEpisodes {
    fn default() -> Self {
        Self::with_capacity(REJECTED_MEMORY)
    }
}

impl RejectedEpisodes {
    /// Remember at most `capacity` episodes (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            episodes: VecDeque::with_capacity(capacity),
        }
    }

    /// Whether `episode` was rejected recently.
    pub fn contains(&self, episode: &EpisodeHandle) -> bool {
        self.episodes.contains(episode)
    }

    /// Record a rejection, evicting the oldest entry when full.
    pub fn insert(&mut self, episode: EpisodeHandle) {
        if self.contains(&episode) {
            return;
        }
        if self.episodes.len() == self.capacity {
            self.episodes.pop_front();
        }
        self.episodes.push_back(episode);
    }

    /// Number of remembered episodes.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// True when nothing has been rejected.
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
