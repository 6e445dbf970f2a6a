//! Top-level error wrapper types.

use crate::{
    ConfigError, HttpError, JsonError, PlaybackError, PlaybackErrorKind, RetireError, SourceError,
    SourceErrorKind,
};

/// Every error condition the workspace can produce.
///
/// # Examples
///
/// ```
/// use showrunner_error::{HttpError, ShowrunnerError};
///
/// let http_err = HttpError::new("http://localhost:5000/get_episode_path", "Connection failed");
/// let err: ShowrunnerError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ShowrunnerErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Episode source error
    #[from(SourceError)]
    Source(SourceError),
    /// Playback error
    #[from(PlaybackError)]
    Playback(PlaybackError),
    /// Retirement error
    #[from(RetireError)]
    Retire(RetireError),
}

/// Showrunner error with kind discrimination.
///
/// # Examples
///
/// ```
/// use showrunner_error::{ConfigError, ShowrunnerResult};
///
/// fn might_fail() -> ShowrunnerResult<()> {
///     Err(ConfigError::new("showrunner.toml", "Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Showrunner Error: {}", _0)]
pub struct ShowrunnerError(Box<ShowrunnerErrorKind>);

impl ShowrunnerError {
    /// Create a new error from a kind.
    pub fn new(kind: ShowrunnerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ShowrunnerErrorKind {
        &self.0
    }

    /// True when the source simply had no work to hand out.
    pub fn is_not_available(&self) -> bool {
        matches!(
            self.kind(),
            ShowrunnerErrorKind::Source(SourceError {
                kind: SourceErrorKind::NotAvailable,
                ..
            })
        )
    }

    /// True when the episode itself is unusable and must not be replayed as-is.
    ///
    /// Covers unparsable scripts and handles that no longer resolve.
    pub fn is_rejected_episode(&self) -> bool {
        matches!(
            self.kind(),
            ShowrunnerErrorKind::Playback(PlaybackError {
                kind: PlaybackErrorKind::Malformed(_) | PlaybackErrorKind::NotFound(_),
                ..
            })
        )
    }

    /// False only for errors that repeating the same step cannot cure.
    pub fn is_retryable(&self) -> bool {
        !self.is_rejected_episode()
    }
}

// Generic From implementation for any type that converts to ShowrunnerErrorKind
impl<T> From<T> for ShowrunnerError
where
    T: Into<ShowrunnerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for showrunner operations.
pub type ShowrunnerResult<T> = std::result::Result<T, ShowrunnerError>;
