//! Error types for easel

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for easel operations
pub type Result<T> = std::result::Result<T, EaselError>;

/// Easel error types
#[derive(Error, Debug)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML syntax error: {0}")]
    Syntax(#[source] toml::de::Error),

    #[error("TOML validation error: {0}")]
    Schema(String),

    #[error("Invalid pattern '{id}': {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid color: {0}")]
    UnknownColor(String),

    #[error("Invalid attribute: {0}")]
    UnknownAttribute(String),

    #[error("Duplicate pattern key: {0}")]
    DuplicateId(String),

    #[error("No config file given and no default config found")]
    NoConfig,
}
