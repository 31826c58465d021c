// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;

use crate::error::Error;
use crate::event::{Event, EventKind, Mark};

/// A pull-style producer of parse events.
///
/// Opening a source is its constructor and closing it is dropping it. Each
/// event returned by [`next_event`](EventSource::next_event) is released
/// when the caller drops it; its scalar text must be copied if it is needed
/// afterwards.
pub trait EventSource {
    /// Pulls the next event. Returns `Ok(None)` once the stream is exhausted
    /// and `Err` when the underlying parser rejects the input.
    fn next_event(&mut self) -> Result<Option<Event<'_>>, Error>;

    /// The kind of the event the next call to `next_event` would return,
    /// without consuming it.
    fn peek_kind(&mut self) -> Result<Option<EventKind>, Error>;

    /// Position of the most recently pulled event, if the source tracks it.
    fn mark(&self) -> Option<Mark> {
        None
    }
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> Result<Option<Event<'_>>, Error> {
        (**self).next_event()
    }

    fn peek_kind(&mut self) -> Result<Option<EventKind>, Error> {
        (**self).peek_kind()
    }

    fn mark(&self) -> Option<Mark> {
        (**self).mark()
    }
}

/// An event source that replays a prepared list of events.
///
/// Handy for driving schema routines from something other than YAML text,
/// and for observing exactly how many events a routine pulled.
#[derive(Debug, Clone, Default)]
pub struct EventQueue<'a> {
    events: VecDeque<Event<'a>>,
    pulled: usize,
}

impl<'a> EventQueue<'a> {
    /// Creates a queue that yields `events` in order.
    pub fn new(events: impl IntoIterator<Item = Event<'a>>) -> Self {
        Self {
            events: events.into_iter().collect(),
            pulled: 0,
        }
    }

    /// Number of events handed out by `next_event` so far.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// Number of events not yet pulled.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for EventQueue<'_> {
    fn next_event(&mut self) -> Result<Option<Event<'_>>, Error> {
        let event = self.events.pop_front();
        if event.is_some() {
            self.pulled += 1;
        }
        Ok(event)
    }

    fn peek_kind(&mut self) -> Result<Option<EventKind>, Error> {
        Ok(self.events.front().map(Event::kind))
    }
}
