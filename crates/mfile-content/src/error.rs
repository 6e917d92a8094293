//! Error types for mfile-content

use crate::format::Format;

/// Result type for mfile-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing file content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown file format: {0:?}")]
    UnknownFormat(String),

    #[error("Unknown file pattern location: {0:?}")]
    UnknownPatternLocation(String),

    #[error("Cannot use a pattern together with the {0} format")]
    PatternAndNonTextFormat(Format),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
