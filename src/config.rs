//! Configuration file support
//!
//! Loads the pattern list from a TOML file, by default ~/.easel.toml
//! (or %USERPROFILE%\.easel.toml on Windows).
//!
//! Each entry of the `patterns` table is one pattern; the table key is its
//! id. Entries are kept in the order they appear in the file.
//!
//! Example:
//! ```toml
//! [patterns.error]
//! pattern = "ERROR|FATAL"
//! foreground_color = "red"
//! attributes = "bold,underline"
//!
//! [patterns.timestamp]
//! pattern = '^\d{4}-\d{2}-\d{2}'
//! foreground_color = "#808080"
//! background_color = ""
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{EaselError, Result};
use crate::style::{PatternRecord, StyleTable};

/// Top-level layout of the config file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    patterns: toml::Table,
}

/// One `[patterns.<id>]` entry before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPattern {
    pattern: String,
    #[serde(default)]
    foreground_color: String,
    #[serde(default)]
    background_color: String,
    #[serde(default)]
    attributes: String,
}

/// Get the default config file path
pub fn config_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|home| PathBuf::from(home).join(".easel.toml"))
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".easel.toml"))
    }
}

/// Load and validate a config file
pub fn load(path: &Path) -> Result<StyleTable> {
    let contents = fs::read_to_string(path).map_err(|source| EaselError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse(&contents)?;
    info!(path = %path.display(), patterns = table.len(), "loaded config");
    Ok(table)
}

/// Parse and validate config file contents
pub fn parse(contents: &str) -> Result<StyleTable> {
    let document: toml::Table = contents.parse().map_err(EaselError::Syntax)?;
    let raw: RawConfig = toml::Value::Table(document)
        .try_into()
        .map_err(|e: toml::de::Error| EaselError::Schema(e.message().to_string()))?;

    let mut records = Vec::with_capacity(raw.patterns.len());
    for (id, value) in raw.patterns {
        let entry: RawPattern = value
            .try_into()
            .map_err(|e: toml::de::Error| {
                EaselError::Schema(format!("pattern '{}': {}", id, e.message()))
            })?;

        let record = PatternRecord::from_tokens(
            &id,
            &entry.pattern,
            &entry.foreground_color,
            &entry.background_color,
            &entry.attributes,
        )?;
        debug!(id = %record.id, pattern = %entry.pattern, "compiled pattern");
        records.push(record);
    }

    StyleTable::new(records)
}
