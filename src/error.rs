//! Error types for tagdex

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagdex application
#[derive(Debug, Error)]
pub enum TagdexError {
    #[error("Not a tagdex site: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Front matter error: {0}")]
    FrontMatter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagdexError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagdexError::NotSiteDirectory(_) => 2,
            TagdexError::FrontMatter(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagdexError::NotSiteDirectory(path) => {
                format!(
                    "Not a tagdex site: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagdex init' in this directory to create a new site\n\
                    • Navigate to a directory containing tagdex.toml\n\
                    • Set TAGDEX_ROOT environment variable to your site path",
                    path.display()
                )
            }
            TagdexError::FrontMatter(msg) => {
                format!(
                    "Front matter error: {}\n\n\
                    Suggestions:\n\
                    • Front matter must be valid YAML between two '---' lines\n\
                    • 'tags' must be a string or a list of strings\n\
                    • 'date' must use the YYYY-MM-DD format",
                    msg
                )
            }
            TagdexError::Config(msg) => {
                if msg.contains("cloud_name") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Add a [cdn] section with cloud_name to tagdex.toml\n\
                        • Or set the TAGDEX_CDN_NAME environment variable\n\
                        Example:\n\
                        [cdn]\n\
                        cloud_name = \"my-account\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagdexError
pub type Result<T> = std::result::Result<T, TagdexError>;
