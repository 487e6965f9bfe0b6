//! Style stack resolution
//!
//! Walks a position-ordered event timeline and decides which SGR code, if
//! any, to write at each boundary. Open styles live on a LIFO stack. A close
//! for a style that is not on top of the stack (crossing spans) is parked in
//! the deferred set and carried out once everything above it has closed.

use std::collections::HashSet;

use tracing::trace;

use super::render::LineRenderer;
use super::span::{BoundaryEvent, EventKind};
use crate::style::RESET;

/// Per-line resolver state
///
/// Built fresh for each line and consumed by [`StackResolver::run`], so
/// nothing can leak from one line into the next.
#[derive(Default)]
pub struct StackResolver<'a> {
    /// Currently open styles, innermost last
    active: Vec<BoundaryEvent<'a>>,
    /// Ids whose close arrived while they were buried in the stack
    deferred: HashSet<&'a str>,
}

impl<'a> StackResolver<'a> {
    /// Resolve `events` (already sequenced) against `line`
    pub fn run(mut self, line: &[u8], events: &[BoundaryEvent<'a>]) -> Vec<u8> {
        let mut renderer = LineRenderer::new(line);

        for event in events {
            renderer.advance_to(event.position);
            match event.kind {
                EventKind::Open => self.open(*event, &mut renderer),
                EventKind::Close => self.close(*event, &mut renderer),
            }
        }

        debug_assert!(self.active.is_empty(), "style stack not drained");
        debug_assert!(self.deferred.is_empty(), "deferred close left over");

        renderer.finish()
    }

    fn open(&mut self, event: BoundaryEvent<'a>, renderer: &mut LineRenderer<'_>) {
        self.active.push(event);
        renderer.push_code(&event.record.combined_code());
    }

    fn close(&mut self, event: BoundaryEvent<'a>, renderer: &mut LineRenderer<'_>) {
        match self.active.last() {
            Some(top) if top.id() == event.id() => {
                self.active.pop();

                // Closes that were waiting on this one can go now
                while let Some(top) = self.active.last() {
                    if !self.deferred.remove(top.id()) {
                        break;
                    }
                    self.active.pop();
                }

                match self.active.last() {
                    Some(enclosing) => renderer.push_code(&enclosing.record.combined_code()),
                    None => renderer.push_code(RESET),
                }
            }
            Some(top) => {
                trace!(
                    id = event.id(),
                    top = top.id(),
                    position = event.position,
                    "deferring close"
                );
                self.deferred.insert(event.id());
            }
            // Unreachable for paired events: every close follows its own open
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PatternRecord;

    fn record(id: &str, code: &str) -> PatternRecord {
        PatternRecord::new(id, id, code, "", "").unwrap()
    }

    fn open(position: usize, record: &PatternRecord) -> BoundaryEvent<'_> {
        BoundaryEvent {
            position,
            kind: EventKind::Open,
            record,
        }
    }

    fn close(position: usize, record: &PatternRecord) -> BoundaryEvent<'_> {
        BoundaryEvent {
            position,
            kind: EventKind::Close,
            record,
        }
    }

    #[test]
    fn test_no_events() {
        let out = StackResolver::default().run(b"plain text", &[]);
        assert_eq!(out, b"plain text");
    }

    #[test]
    fn test_nested_restores_outer() {
        let a = record("a", "<A>");
        let b = record("b", "<B>");
        let events = [open(0, &a), open(2, &b), close(4, &b), close(6, &a)];

        let out = StackResolver::default().run(b"abcdefgh", &events);
        assert_eq!(out, b"<A>ab<B>cd<A>ef\x1b[0mgh");
    }

    #[test]
    fn test_crossing_close_is_deferred() {
        let a = record("a", "<A>");
        let b = record("b", "<B>");
        let events = [open(0, &a), open(2, &b), close(4, &a), close(6, &b)];

        let out = StackResolver::default().run(b"abcdefgh", &events);
        assert_eq!(out, b"<A>ab<B>cdef\x1b[0mgh");
    }

    #[test]
    fn test_cascade_stops_at_live_entry() {
        let a = record("a", "<A>");
        let b = record("b", "<B>");
        let c = record("c", "<C>");
        // a is closed while buried, then c closes exposing b (still live)
        let events = [
            open(0, &a),
            open(1, &b),
            open(2, &c),
            close(3, &a),
            close(4, &c),
            close(5, &b),
        ];

        let out = StackResolver::default().run(b"abcdefg", &events);
        assert_eq!(out, b"<A>a<B>b<C>cd<B>e\x1b[0mfg");
    }

    #[test]
    fn test_cascade_pops_several_deferred() {
        let a = record("a", "<A>");
        let b = record("b", "<B>");
        let c = record("c", "<C>");
        let events = [
            open(0, &a),
            open(1, &b),
            open(2, &c),
            close(3, &a),
            close(4, &b),
            close(5, &c),
        ];

        let out = StackResolver::default().run(b"abcdefg", &events);
        assert_eq!(out, b"<A>a<B>b<C>cde\x1b[0mfg");
    }

    #[test]
    fn test_zero_width_inside_outer() {
        let a = record("a", "<A>");
        let z = record("z", "<Z>");
        let events = [open(0, &a), open(2, &z), close(2, &z), close(4, &a)];

        let out = StackResolver::default().run(b"abcd", &events);
        assert_eq!(out, b"<A>ab<Z><A>cd\x1b[0m");
    }
}
