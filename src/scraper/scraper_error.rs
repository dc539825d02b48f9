use std::time::Duration;
use thiserror::Error;

/// Failures raised by a browsing session or by the extraction code driving it.
///
/// The `Display` text doubles as the `error` column of a failed listing, so keep it readable.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Navigation to {url} timed out after {}s", .timeout.as_secs())]
    NavigationTimeout { url: String, timeout: Duration },

    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Timed out after {}s waiting for '{selector}'", .timeout.as_secs())]
    LandmarkTimeout { selector: String, timeout: Duration },

    #[error("No page loaded; navigate before querying the document")]
    NotNavigated,

    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("Browser session could not start: {0}")]
    Launch(String),
}
