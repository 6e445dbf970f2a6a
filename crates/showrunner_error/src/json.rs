//! JSON document error types.

/// A JSON document that could not be encoded or decoded.
///
/// Episode scripts have their own playback error kinds; this covers the
/// remaining documents (scene manifests, service payloads).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} at line {} in {}", document, message, line, file)]
pub struct JsonError {
    /// Document being encoded or decoded
    pub document: String,
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError for `document` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use showrunner_error::JsonError;
    ///
    /// let err = JsonError::new("supported_scenes.json", "key must be a string");
    /// assert!(format!("{}", err).contains("in supported_scenes.json"));
    /// ```
    #[track_caller]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
