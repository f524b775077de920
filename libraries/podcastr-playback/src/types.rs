//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Coarse transport state, derived from the context flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No episode selected
    Empty,

    /// Episode selected and playing
    Playing,

    /// Episode selected, paused
    Paused,
}

impl PlaybackState {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackState::Empty => "empty",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
        }
    }
}

/// Configuration for the playback context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,

    /// Start playing as soon as an episode is selected (default: true)
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            looping: false,
            shuffling: false,
            autoplay: true,
        }
    }
}
