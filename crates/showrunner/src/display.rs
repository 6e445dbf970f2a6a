//! Status display backed by the log stream.

use showrunner_interface::StatusDisplay;
use tracing::info;

/// Writes titles and captions as log events.
///
/// Useful for headless hosts, where the log is the only thing an operator
/// watches.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatusDisplay;

impl StatusDisplay for TracingStatusDisplay {
    fn show_title(&self, title: &str) {
        info!(title, "Title");
    }

    fn show_caption(&self, caption: &str) {
        info!(caption, "Caption");
    }
}
