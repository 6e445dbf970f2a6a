//! Configuration error types.

/// A configuration layer that could not be read, parsed or applied.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error ({}): {} at line {} in {}", layer, message, line, file)]
pub struct ConfigError {
    /// Which layer failed: a file path, "bundled defaults", "environment", ...
    pub layer: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError for `layer` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use showrunner_error::ConfigError;
    ///
    /// let err = ConfigError::new("./showrunner.toml", "unknown variant `ftp`");
    /// assert_eq!(err.layer, "./showrunner.toml");
    /// ```
    #[track_caller]
    pub fn new(layer: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            layer: layer.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
