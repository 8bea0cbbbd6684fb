//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Only the backend seam is fallible; session operations degrade to the
/// idle display state instead of surfacing errors to the transport UI.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media URL was empty or not something the backend can open
    #[error("invalid media url: {0:?}")]
    InvalidUrl(String),

    /// The backend failed to load or buffer the media resource
    #[error("media load failed: {0}")]
    Load(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
