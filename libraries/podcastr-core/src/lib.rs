//! Podcastr Core
//!
//! Platform-agnostic types and helpers shared by the Podcastr crates.
//!
//! This crate provides:
//! - **Domain Types**: `Episode` and the raw `ApiEpisode` record it is built from
//! - **Catalog**: the episode list delivered by the content source
//! - **Formatting**: `HH:MM:SS` duration strings
//! - **Error Handling**: unified `PodcastrError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format_duration, Catalog};
//!
//! let json = r#"[{
//!     "id": "a-importancia-da-contribuicao-em-open-source",
//!     "title": "Faladev #30 | A importância da contribuição em Open Source",
//!     "members": "Diego, João Pedro, Diego Haz e Bruno Lemos",
//!     "published_at": "2021-01-22 15:00:00",
//!     "thumbnail": "https://example.com/opensource.jpg",
//!     "description": "<p>Neste episódio...</p>",
//!     "file": { "url": "https://example.com/opensource.m4a", "type": "audio/x-m4a", "duration": 3981 }
//! }]"#;
//!
//! let catalog = Catalog::from_json(json).unwrap();
//! let episode = &catalog.episodes()[0];
//! assert_eq!(episode.duration_as_string, "01:06:21");
//! assert_eq!(format_duration(59), "00:00:59");
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod episode;
pub mod error;
pub mod time;

// Re-export commonly used types
pub use catalog::Catalog;
pub use episode::{ApiEpisode, ApiEpisodeFile, Episode};
pub use error::{PodcastrError, Result};
pub use time::format_duration;
