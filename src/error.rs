//! Error types for the portfolio site

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or rendering the site
///
/// The view-activation model itself never fails: a missing region or a
/// missing scroll target is a silent no-op. These variants cover loading
/// configuration and content and producing markup.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid site configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid site content (links, names, duplicate keys)
    #[error("Invalid content: {0}")]
    Content(String),

    /// Failed to render or lay out the page
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Filesystem error while reading inputs or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
