/// Web app configuration
use podcastr_core::{PodcastrError, Result};
use podcastr_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};

/// Configuration embedded at build time
const EMBEDDED_CONFIG: &str = include_str!("../podcastr.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// `tracing` filter directive, e.g. `info` or `podcastr_playback=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub home: HomeSettings,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HomeSettings {
    /// Episodes shown as cards above the full table
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            latest_count: default_latest_count(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            log_level: default_log_level(),
            home: HomeSettings::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(source: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .map_err(|e| PodcastrError::config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| PodcastrError::config(e.to_string()))
    }

    /// Load the embedded configuration
    pub fn load() -> Result<Self> {
        Self::from_toml(EMBEDDED_CONFIG)
    }
}

fn default_title() -> String {
    "Podcastr".to_string()
}

fn default_tagline() -> String {
    "O melhor para você ouvir, sempre".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_latest_count() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.title, "Podcastr");
        assert_eq!(config.home.latest_count, 2);
        assert!(config.playback.autoplay);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = AppConfig::from_toml("title = \"Test\"").unwrap();
        assert_eq!(config.title, "Test");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.home, HomeSettings::default());
        assert_eq!(config.playback, PlaybackConfig::default());
    }

    #[test]
    fn playback_section_overrides() {
        let config = AppConfig::from_toml("[playback]\nlooping = true\n").unwrap();
        assert!(config.playback.looping);
        assert!(!config.playback.shuffling);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("title = ").unwrap_err();
        assert!(matches!(err, PodcastrError::Config(_)));
    }
}
