//! Line highlighting
//!
//! Pipeline run once per input line:
//! - `span`: first match of each pattern becomes an open/close event pair
//! - `sequence`: events are stably ordered by position
//! - `resolve`: the style stack picks the code to emit at each boundary
//! - `render`: text slices and codes are joined into the output line

mod render;
mod resolve;
mod sequence;
mod span;

pub use render::LineRenderer;
pub use resolve::StackResolver;
pub use sequence::sequence;
pub use span::{find_events, BoundaryEvent, EventKind};

use crate::style::StyleTable;

/// Colorize a single line
///
/// Works on raw bytes so text outside any match is copied exactly, even
/// when it is not valid UTF-8. A line no pattern matches comes back
/// unchanged.
pub fn colorize_line(table: &StyleTable, line: &[u8]) -> Vec<u8> {
    let mut events = find_events(table, line);
    if events.is_empty() {
        return line.to_vec();
    }
    sequence(&mut events);
    StackResolver::default().run(line, &events)
}
