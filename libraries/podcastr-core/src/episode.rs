//! Episode records
//!
//! `ApiEpisode` is the raw shape delivered by the content source. `Episode`
//! is what the rest of the app works with: immutable, with display strings
//! computed once at load time.

use crate::error::{PodcastrError, Result};
use crate::time::format_duration;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by the content source
const API_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display format for publication dates (`8 Jan 21`)
const DISPLAY_DATE_FORMAT: &str = "%-d %b %y";

/// Raw episode record as served by the content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: ApiEpisodeFile,
}

/// Audio file attached to an `ApiEpisode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEpisodeFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    /// Length in whole seconds
    pub duration: u32,
}

/// A playable podcast episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique identifier (also used as the route slug)
    pub id: String,

    pub title: String,

    /// Hosts and guests, comma separated
    pub members: String,

    /// Cover image URL
    pub thumbnail: String,

    /// Audio URL handed to the media element
    pub url: String,

    /// Length in whole seconds
    pub duration: u32,

    /// `duration` pre-formatted as `HH:MM:SS`
    pub duration_as_string: String,

    /// Publication date pre-formatted for display, empty when unknown
    pub published_at: String,

    /// Publication timestamp, used for ordering
    pub published: Option<NaiveDateTime>,

    /// Long-form show notes (HTML)
    pub description: String,
}

impl Episode {
    /// Create an episode with the fields needed for playback
    ///
    /// Display-only fields start empty; fill them in with the `with_*` methods.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members: String::new(),
            thumbnail: String::new(),
            url: url.into(),
            duration,
            duration_as_string: format_duration(duration),
            published_at: String::new(),
            published: None,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_members(mut self, members: impl Into<String>) -> Self {
        self.members = members.into();
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_published(mut self, published: NaiveDateTime) -> Self {
        self.published_at = published.format(DISPLAY_DATE_FORMAT).to_string();
        self.published = Some(published);
        self
    }
}

impl TryFrom<ApiEpisode> for Episode {
    type Error = PodcastrError;

    fn try_from(raw: ApiEpisode) -> Result<Self> {
        let published = NaiveDateTime::parse_from_str(&raw.published_at, API_DATE_FORMAT)
            .map_err(|e| {
                PodcastrError::invalid_input(format!(
                    "episode {}: bad published_at {:?}: {}",
                    raw.id, raw.published_at, e
                ))
            })?;

        Ok(Episode::new(raw.id, raw.title, raw.file.url, raw.file.duration)
            .with_members(raw.members)
            .with_thumbnail(raw.thumbnail)
            .with_description(raw.description)
            .with_published(published))
    }
}
