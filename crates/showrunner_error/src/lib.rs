//! Error types for the showrunner workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The loop-level policy keys off the kind: transport failures and empty
//! queues are retried, malformed episodes are skipped, retirement failures
//! degrade to deletion.
//!
//! # Examples
//!
//! ```
//! use showrunner_error::{ShowrunnerResult, SourceError, SourceErrorKind};
//!
//! fn fetch_next() -> ShowrunnerResult<String> {
//!     Err(SourceError::new(SourceErrorKind::NotAvailable))?
//! }
//!
//! let err = fetch_next().unwrap_err();
//! assert!(err.is_not_available());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod playback;
mod retire;
mod source;

pub use config::ConfigError;
pub use error::{ShowrunnerError, ShowrunnerErrorKind, ShowrunnerResult};
pub use http::HttpError;
pub use json::JsonError;
pub use playback::{PlaybackError, PlaybackErrorKind};
pub use retire::{RetireError, RetireErrorKind};
pub use source::{SourceError, SourceErrorKind};
