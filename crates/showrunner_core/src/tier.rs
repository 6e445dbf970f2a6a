//! Queue tiers of the directory episode source.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Precedence class of a queued episode.
///
/// Variants are declared in selection order: prioritized episodes win over
/// unreleased ones, which win over already released ones. Order inside a tier
/// is whatever the filesystem lists first.
///
/// # Examples
///
/// ```
/// use showrunner_core::QueueTier;
///
/// let order: Vec<_> = QueueTier::by_precedence().collect();
/// assert_eq!(order, vec![QueueTier::Prioritized, QueueTier::Unreleased, QueueTier::Released]);
/// assert_eq!(QueueTier::Released.dir_name(), "released_episodes");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QueueTier {
    /// Episodes pushed to the front of the queue
    Prioritized,
    /// Episodes never played
    Unreleased,
    /// Episodes already played once
    Released,
}

impl QueueTier {
    /// Tiers in selection order.
    pub fn by_precedence() -> impl Iterator<Item = QueueTier> {
        QueueTier::iter()
    }

    /// Directory holding this tier under the queue root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            QueueTier::Prioritized => "prioritized_episodes",
            QueueTier::Unreleased => "unreleased_episodes",
            QueueTier::Released => "released_episodes",
        }
    }
}
