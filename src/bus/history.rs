//! Bounded audit buffer for emitted events.

use std::collections::VecDeque;

use crate::event::{Event, EventKind};

/// FIFO ring of the most recent events. Once full, pushing evicts the
/// oldest entry first.
#[derive(Debug)]
pub(crate) struct EventHistory {
    buf: VecDeque<Event>,
    capacity: usize,
}

impl EventHistory {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::new(),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, event: Event) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(event);
    }

    /// The most recent `limit` events in chronological order, optionally
    /// restricted to one kind.
    pub(crate) fn recent(&self, filter: Option<EventKind>, limit: usize) -> Vec<Event> {
        let mut out: Vec<Event> = self
            .buf
            .iter()
            .rev()
            .filter(|e| filter.map_or(true, |kind| e.kind() == kind))
            .take(limit)
            .cloned()
            .collect();
        out.reverse();
        out
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }
}
