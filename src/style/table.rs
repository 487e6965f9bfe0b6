//! Pattern records and the style table
//!
//! A style table is the ordered list of configured patterns. Order is the
//! declaration order of the config file and decides which style opens first
//! when two patterns start at the same column.

use std::collections::HashSet;

use regex::bytes::Regex;

use super::token;
use crate::error::{EaselError, Result};

/// A named pattern paired with its pre-rendered style codes
#[derive(Debug, Clone)]
pub struct PatternRecord {
    /// Unique identifier (the config table key)
    pub id: String,
    /// Compiled regex
    pub matcher: Regex,
    /// Foreground SGR sequence, empty for none
    pub foreground: String,
    /// Background SGR sequence, empty for none
    pub background: String,
    /// Concatenated attribute SGR sequences, empty for none
    pub attributes: String,
}

impl PatternRecord {
    /// Create a record from a regex source and already rendered codes
    pub fn new(
        id: &str,
        pattern: &str,
        foreground: &str,
        background: &str,
        attributes: &str,
    ) -> Result<Self> {
        let matcher = Regex::new(pattern).map_err(|source| EaselError::InvalidPattern {
            id: id.to_string(),
            source,
        })?;
        Ok(Self {
            id: id.to_string(),
            matcher,
            foreground: foreground.to_string(),
            background: background.to_string(),
            attributes: attributes.to_string(),
        })
    }

    /// Create a record from config tokens, rendering each one
    pub fn from_tokens(
        id: &str,
        pattern: &str,
        foreground: &str,
        background: &str,
        attributes: &str,
    ) -> Result<Self> {
        Self::new(
            id,
            pattern,
            &token::foreground(foreground)?,
            &token::background(background)?,
            &token::attributes(attributes)?,
        )
    }

    /// Foreground, background and attributes, in that order
    pub fn combined_code(&self) -> String {
        let mut code = String::with_capacity(
            self.foreground.len() + self.background.len() + self.attributes.len(),
        );
        code.push_str(&self.foreground);
        code.push_str(&self.background);
        code.push_str(&self.attributes);
        code
    }

    /// Leftmost first match as a byte range
    pub fn find(&self, text: &[u8]) -> Option<(usize, usize)> {
        self.matcher.find(text).map(|m| (m.start(), m.end()))
    }
}

/// Ordered, immutable collection of pattern records
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    records: Vec<PatternRecord>,
}

impl StyleTable {
    /// Build a table, rejecting duplicate ids
    pub fn new(records: Vec<PatternRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(EaselError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Records in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &PatternRecord> {
        self.records.iter()
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&PatternRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
