//! Error types for poststore

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the post store
#[derive(Debug, Error)]
pub enum PostStoreError {
    #[error("Cannot read post data {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed post data {}: {source}", .path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PostStoreError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostStoreError::SourceUnavailable { .. } => 2,
            PostStoreError::MalformedSource { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PostStoreError::SourceUnavailable { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Create {} (default location: data/posts.json under the store root)\n\
                    • Pass --root or set POSTSTORE_ROOT to the site directory\n\
                    • Set data_dir / file_name in poststore.toml",
                    self,
                    path.display()
                )
            }
            PostStoreError::MalformedSource { .. } => {
                format!(
                    "{}\n\n\
                    Expected a JSON array of posts, e.g.:\n\
                    [{{\"id\": 1, \"title\": \"Hello\", \"date\": \"2021-01-01\", \
                    \"author\": \"A\", \"contentHtml\": \"<p>hi</p>\"}}]\n\
                    Every post needs an \"id\" that is a number, string or boolean,\n\
                    and titles must be strings (or null) to be sorted.",
                    self
                )
            }
            PostStoreError::Config(msg) => {
                if msg.starts_with("Invalid id format") {
                    format!(
                        "{}\n\n\
                        Valid id formats: compat, string",
                        msg
                    )
                } else if msg.starts_with("Invalid locale")
                    || msg.starts_with("No collation data")
                {
                    format!(
                        "{}\n\n\
                        Use a BCP-47 language tag, e.g. en, de, fr-CA",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PostStoreError::MalformedSource {
            path: path.into(),
            source,
        }
    }
}

/// Result type using PostStoreError
pub type Result<T> = std::result::Result<T, PostStoreError>;
