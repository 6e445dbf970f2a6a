//! Playback error types.

/// Specific error conditions while playing an episode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PlaybackErrorKind {
    /// Episode handle does not resolve to a readable script
    #[display("Episode not found: {}", _0)]
    NotFound(String),
    /// Episode script exists but could not be read this time
    #[display("Episode script unreadable: {}", _0)]
    Unreadable(String),
    /// Episode script could not be parsed
    #[display("Malformed episode script: {}", _0)]
    Malformed(String),
    /// Actor, target or clip missing at runtime
    #[display("Missing resource: {}", _0)]
    MissingResource(String),
    /// Audio clip could not be played to completion
    #[display("Clip playback failed: {}", _0)]
    ClipFailed(String),
}

/// Error type for episode playback.
///
/// # Examples
///
/// ```
/// use showrunner_error::{PlaybackError, PlaybackErrorKind};
///
/// let err = PlaybackError::new(PlaybackErrorKind::Malformed("expected `[`".to_string()));
/// assert!(format!("{}", err).contains("Malformed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Playback Error: {} at line {} in {}", kind, line, file)]
pub struct PlaybackError {
    /// The specific error condition
    pub kind: PlaybackErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PlaybackError {
    /// Create a new PlaybackError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlaybackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
