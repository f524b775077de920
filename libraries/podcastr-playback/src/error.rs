//! Error types for playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaybackError {
    /// No episode is currently selected
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Index does not point into the episode list
    #[error("Index {index} out of bounds for episode list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The media element rejected a call
    #[error("Media element error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
