//! easel - colorize text lines by regex
//!
//! Each configured pattern carries foreground, background and attribute
//! codes. Matches may overlap or nest; the highlighter keeps a style stack
//! so the enclosing style is restored when an inner match ends.

pub mod config;
pub mod error;
pub mod highlight;
pub mod stream;
pub mod style;

pub use error::{EaselError, Result};
pub use highlight::colorize_line;
pub use stream::colorize_stream;
pub use style::{PatternRecord, StyleTable};
