//! Span finding
//!
//! Locates the first match of every pattern in a line and turns each match
//! into an open/close pair of boundary events.

use crate::style::{PatternRecord, StyleTable};

/// Which side of a matched span an event marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Open,
    Close,
}

/// A span boundary tied to the pattern that produced it
#[derive(Debug, Clone, Copy)]
pub struct BoundaryEvent<'a> {
    /// Byte offset into the line
    pub position: usize,
    pub kind: EventKind,
    pub record: &'a PatternRecord,
}

impl<'a> BoundaryEvent<'a> {
    pub fn id(&self) -> &'a str {
        &self.record.id
    }
}

/// Collect boundary events for a line
///
/// Patterns are visited in table order and each contributes at most one
/// open/close pair, pushed open first. Later occurrences of a pattern in the
/// same line are not styled.
pub fn find_events<'a>(table: &'a StyleTable, line: &[u8]) -> Vec<BoundaryEvent<'a>> {
    let mut events = Vec::with_capacity(table.len() * 2);

    for record in table.iter() {
        let Some((start, end)) = record.find(line) else {
            continue;
        };
        events.push(BoundaryEvent {
            position: start,
            kind: EventKind::Open,
            record,
        });
        events.push(BoundaryEvent {
            position: end,
            kind: EventKind::Close,
            record,
        });
    }

    events
}
