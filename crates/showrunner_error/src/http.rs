//! HTTP error types.

/// A request to the episode service that failed or was refused.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} ({}) at line {} in {}", message, url, line, file)]
pub struct HttpError {
    /// Request URL, or the client stage that failed before any request
    pub url: String,
    /// What went wrong
    pub message: String,
    /// Response status, when the service answered at all
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// A request that never produced a response.
    ///
    /// # Examples
    ///
    /// ```
    /// use showrunner_error::HttpError;
    ///
    /// let err = HttpError::new("http://localhost:5000/get_episode_path", "Connection refused");
    /// assert_eq!(err.status, None);
    /// assert!(!err.is_rejection());
    /// ```
    #[track_caller]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::located(url.into(), message.into(), None)
    }

    /// The service answered with a non-success status.
    ///
    /// An empty body is reported by status alone.
    #[track_caller]
    pub fn rejected(url: impl Into<String>, status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("Rejected with status {}", status)
        } else {
            format!("Rejected with status {}: {}", status, body.trim())
        };
        Self::located(url.into(), message, Some(status))
    }

    /// Whether the service answered and refused.
    pub fn is_rejection(&self) -> bool {
        self.status.is_some()
    }

    #[track_caller]
    fn located(url: String, message: String, status: Option<u16>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            url,
            message,
            status,
            line: location.line(),
            file: location.file(),
        }
    }
}
