/// Core error types for Podcastr
use thiserror::Error;

/// Result type alias using `PodcastrError`
pub type Result<T> = std::result::Result<T, PodcastrError>;

/// Core error type for Podcastr
#[derive(Error, Debug)]
pub enum PodcastrError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PodcastrError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = PodcastrError::not_found("Episode", "faladev-30");
        assert_eq!(err.to_string(), "Episode not found: faladev-30");
    }

    #[test]
    fn serde_errors_convert() {
        let err: PodcastrError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PodcastrError::Serialization(_)));
    }
}
