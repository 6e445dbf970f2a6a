//! Episode retirement error types.

/// Specific error conditions while retiring a consumed episode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RetireErrorKind {
    /// Moving the episode into the released tier failed
    #[display("Failed to archive episode: {}", _0)]
    Move(String),
    /// Deleting the episode after a failed move also failed
    #[display("Failed to delete episode: {}", _0)]
    Delete(String),
}

/// Error type for episode retirement.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Retire Error: {} at line {} in {}", kind, line, file)]
pub struct RetireError {
    /// The specific error condition
    pub kind: RetireErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RetireError {
    /// Create a new RetireError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RetireErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
