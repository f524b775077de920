//! Episode catalog
//!
//! The catalog is the list of episodes delivered by the content source,
//! converted to `Episode` and ordered newest first.

use crate::episode::{ApiEpisode, Episode};
use crate::error::{PodcastrError, Result};
use std::collections::HashSet;

/// Ordered, de-duplicated list of episodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Newest first; undated episodes last
    episodes: Vec<Episode>,
}

impl Catalog {
    /// Build a catalog from already converted episodes
    ///
    /// Episodes are sorted by publication date, newest first. The sort is
    /// stable, so episodes with equal dates keep their input order.
    pub fn new(mut episodes: Vec<Episode>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(episodes.len());
        for episode in &episodes {
            if !seen.insert(episode.id.as_str()) {
                return Err(PodcastrError::Duplicate(episode.id.clone()));
            }
        }

        // `None < Some(_)`, so reversing puts undated episodes last.
        episodes.sort_by(|a, b| b.published.cmp(&a.published));

        Ok(Self { episodes })
    }

    /// Parse a JSON array of content source records
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<ApiEpisode> = serde_json::from_str(json)?;
        let episodes = raw
            .into_iter()
            .map(Episode::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(episodes)
    }

    /// All episodes, newest first
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// The `count` newest episodes
    pub fn latest(&self, count: usize) -> &[Episode] {
        &self.episodes[..count.min(self.episodes.len())]
    }

    /// Everything after the `count` newest episodes
    pub fn remaining(&self, count: usize) -> &[Episode] {
        &self.episodes[count.min(self.episodes.len())..]
    }

    /// Look up an episode by id
    pub fn find(&self, id: &str) -> Result<&Episode> {
        self.episodes
            .iter()
            .find(|episode| episode.id == id)
            .ok_or_else(|| PodcastrError::not_found("Episode", id))
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
