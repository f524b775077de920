//! Podcastr - Playback Context
//!
//! Platform-agnostic playback state for Podcastr.
//!
//! This crate provides:
//! - The shared playback context (episode list, current index, transport flags)
//! - Shuffle selection (random episode other than the current one)
//! - A `MediaElement` trait for the platform's native audio element
//! - A player controller that keeps the element and the context in sync
//! - A render-ready view model for the player footer
//! - Playback events for UI synchronization
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcastr_playback::{PlayerContext, PlaybackConfig};
//! use podcastr_core::Episode;
//!
//! let mut ctx = PlayerContext::new(PlaybackConfig::default());
//!
//! let episodes = vec![
//!     Episode::new("ep1", "Episode 1", "https://example.com/1.mp3", 1800),
//!     Episode::new("ep2", "Episode 2", "https://example.com/2.mp3", 2400),
//! ];
//!
//! ctx.play_list(episodes, 0).unwrap();
//! assert!(ctx.is_playing());
//! assert!(ctx.has_next());
//!
//! ctx.play_next();
//! assert_eq!(ctx.current_episode().unwrap().id, "ep2");
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_playback::{MediaElement, PlayerContext, PlayerController, Result};
//!
//! // Implement MediaElement for your platform
//! struct MyAudioElement {
//!     // ... handle to the native element
//! }
//!
//! impl MediaElement for MyAudioElement {
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn current_time(&self) -> f64 { 0.0 }
//!     fn set_current_time(&mut self, _seconds: f64) {}
//!     fn set_loop(&mut self, _looping: bool) {}
//! }
//!
//! let mut ctx = PlayerContext::default();
//! let mut controller = PlayerController::new();
//! let mut element = MyAudioElement { /* ... */ };
//!
//! // Whenever is_playing changes
//! controller.sync_playing(&ctx, &mut element).ok();
//!
//! // From the element's "ended" event
//! ctx.apply(controller.on_ended()).ok();
//! ```

mod context;
mod error;
mod events;
mod media;
mod player;
mod shuffle;
pub mod types;

// Public exports
pub use context::{PlayerAction, PlayerContext};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use media::MediaElement;
pub use player::{ButtonView, PlayerController, PlayerView, EMPTY_TIME_LABEL};
pub use shuffle::pick_random_index;
pub use types::{PlaybackConfig, PlaybackState};
