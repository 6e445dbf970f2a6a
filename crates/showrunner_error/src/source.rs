//! Episode source error types.
//!
//! Transport failures are reported as [`crate::HttpError`].

/// Specific error conditions when acquiring episodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SourceErrorKind {
    /// No unconsumed episode is available right now
    #[display("No episode available")]
    NotAvailable,
    /// Response body could not be understood
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
    /// Queue directory could not be listed or written
    #[display("Queue access failed: {}", _0)]
    QueueAccess(String),
}

/// Error type for episode acquisition and scene registration.
///
/// # Examples
///
/// ```
/// use showrunner_error::{SourceError, SourceErrorKind};
///
/// let err = SourceError::new(SourceErrorKind::NotAvailable);
/// assert!(format!("{}", err).contains("No episode available"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Source Error: {} at line {} in {}", kind, line, file)]
pub struct SourceError {
    /// The specific error condition
    pub kind: SourceErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SourceError {
    /// Create a new SourceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
