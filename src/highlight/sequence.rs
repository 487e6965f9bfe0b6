//! Event sequencing

use super::span::BoundaryEvent;

/// Order events by position
///
/// The sort must be stable: events at the same offset keep table order, and
/// a zero-width pattern keeps its open ahead of its close.
pub fn sequence(events: &mut [BoundaryEvent<'_>]) {
    events.sort_by_key(|e| e.position);
}
