//! Playback events
//!
//! Event-based communication for UI synchronization. The context records an
//! event for every observable change; the owner drains them after applying
//! a batch of mutations and forwards them to whatever is listening. The
//! JSON form is camelCase throughout.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// Playing/paused/empty changed
    StateChanged {
        /// The new transport state
        state: PlaybackState,
    },

    /// The current episode changed
    #[serde(rename_all = "camelCase")]
    EpisodeChanged {
        /// Id of the new current episode
        episode_id: String,
        /// Index of the new current episode in the list
        index: usize,
    },

    /// A new episode list was loaded
    QueueChanged {
        /// New list length
        length: usize,
    },

    /// Loop or shuffle flag flipped
    #[serde(rename_all = "camelCase")]
    ModeChanged {
        is_looping: bool,
        is_shuffling: bool,
    },

    /// Everything was reset, nothing is selected
    Cleared,
}
