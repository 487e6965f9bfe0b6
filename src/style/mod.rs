//! Style table and token rendering
//!
//! This module holds the read-only data the highlighter works from:
//! - Pattern records with their compiled regex and SGR codes
//! - Rendering of color and attribute tokens into SGR codes

mod table;
pub mod token;

pub use table::{PatternRecord, StyleTable};
pub use token::RESET;
