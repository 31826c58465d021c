// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::event::{EventKind, Mark};
use crate::options::Options;
use crate::source::EventSource;
use crate::visitor::Visitor;

/// State threaded through one deserialization pass.
///
/// The context borrows its event source for the whole pass and keeps a
/// sticky error slot: the first error recorded is returned by every later
/// call, none of which touch the source again. A context carries nothing
/// across passes; build a fresh one for each.
pub struct Context<'s, S: EventSource + ?Sized> {
    source: &'s mut S,
    options: Options,
    last: Option<EventKind>,
    mark: Option<Mark>,
    error: Option<Error>,
}

impl<'s, S: EventSource + ?Sized> Context<'s, S> {
    /// Starts a pass over `source` with default options.
    pub fn new(source: &'s mut S) -> Self {
        Self::with_options(source, Options::default())
    }

    /// Starts a pass over `source` with the given options.
    pub fn with_options(source: &'s mut S, options: Options) -> Self {
        Context {
            source,
            options,
            last: None,
            mark: None,
            error: None,
        }
    }

    /// The options this pass runs with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Kind of the most recently pulled event.
    pub fn last_kind(&self) -> Option<EventKind> {
        self.last
    }

    /// Source position of the most recently pulled event, when the source
    /// tracks positions.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// True once any step of this pass has failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The first error of this pass, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Ends the pass, yielding the first error if there was one.
    pub fn finish(self) -> Result<(), Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Records `error` unless an earlier one is already held, and returns
    /// whichever error is now sticky.
    pub fn fail(&mut self, error: Error) -> Error {
        match &self.error {
            Some(first) => first.clone(),
            None => {
                log::debug!("deserialization failed at {:?}: {}", self.mark, error);
                self.error = Some(error.clone());
                error
            }
        }
    }

    fn check(&self) -> Result<(), Error> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Pulls one event and checks that it has the `expected` kind.
    ///
    /// On a match the visitor, if any, interprets the scalar text. Visitors
    /// only run for [`EventKind::Scalar`]; passing one with any other kind
    /// is a caller bug. The event is released before this returns, whatever
    /// the outcome. Once the pass has failed this returns the first error
    /// without pulling.
    pub fn consume(
        &mut self,
        expected: EventKind,
        visitor: Option<Visitor<'_>>,
    ) -> Result<(), Error> {
        debug_assert!(
            visitor.is_none() || expected == EventKind::Scalar,
            "visitor passed for non-scalar {expected}"
        );
        self.check()?;
        let outcome = match self.source.next_event() {
            Err(error) => Err(error),
            Ok(None) => {
                self.last = Some(EventKind::NoEvent);
                Err(Error::mismatch(expected, EventKind::NoEvent))
            }
            Ok(Some(event)) => {
                let found = event.kind();
                self.last = Some(found);
                log::trace!("consume {} (expected {})", found, expected);
                if found != expected {
                    Err(Error::mismatch(expected, found))
                } else {
                    match (visitor, event.as_scalar()) {
                        (Some(visitor), Some(scalar)) => visitor.visit(scalar, &self.options),
                        _ => Ok(()),
                    }
                }
            }
        };
        // The event is released by now
        self.mark = self.source.mark();
        outcome.map_err(|error| self.fail(error))
    }

    /// Kind of the next event, without consuming it. Exhaustion is reported
    /// as [`EventKind::NoEvent`].
    pub fn peek_kind(&mut self) -> Result<EventKind, Error> {
        self.check()?;
        match self.source.peek_kind() {
            Ok(kind) => Ok(kind.unwrap_or(EventKind::NoEvent)),
            Err(error) => Err(self.fail(error)),
        }
    }

    /// Pulls one event of any kind and hands it, with its scalar text, to
    /// `f`. Used by the helpers that branch on what comes next.
    pub(crate) fn consume_any<T>(
        &mut self,
        f: impl FnOnce(EventKind, Option<&str>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.check()?;
        let outcome = match self.source.next_event() {
            Err(error) => Err(error),
            Ok(None) => {
                self.last = Some(EventKind::NoEvent);
                f(EventKind::NoEvent, None)
            }
            Ok(Some(event)) => {
                let found = event.kind();
                self.last = Some(found);
                log::trace!("consume {}", found);
                f(found, event.as_scalar())
            }
        };
        // The event is released by now
        self.mark = self.source.mark();
        outcome.map_err(|error| self.fail(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::source::EventQueue;
    use test_log::test;

    #[test]
    fn matching_event_is_consumed() {
        let mut queue = EventQueue::new([Event::MappingStart]);
        let mut context = Context::new(&mut queue);
        assert_eq!(context.consume(EventKind::MappingStart, None), Ok(()));
        assert_eq!(context.last_kind(), Some(EventKind::MappingStart));
        assert!(!context.is_error());
        assert_eq!(context.finish(), Ok(()));
        assert_eq!(queue.pulled(), 1);
    }

    #[test]
    fn mismatch_names_both_kinds() {
        let mut queue = EventQueue::new([Event::plain("oops")]);
        let mut context = Context::new(&mut queue);
        let error = context.consume(EventKind::MappingStart, None).unwrap_err();
        assert_eq!(error.to_string(), "expected MAPPING_START, but found SCALAR");
        assert_eq!(context.error(), Some(&error));
    }

    #[test]
    fn error_short_circuits_without_pulling() {
        let mut queue =
            EventQueue::new([Event::plain("x"), Event::MappingStart, Event::MappingEnd]);
        let mut context = Context::new(&mut queue);
        let first = context.consume(EventKind::MappingStart, None).unwrap_err();

        // Would match, but the pass has already failed
        assert_eq!(
            context.consume(EventKind::MappingStart, None),
            Err(first.clone())
        );
        assert_eq!(context.peek_kind(), Err(first.clone()));
        assert_eq!(context.finish(), Err(first));
        assert_eq!(queue.pulled(), 1);
        assert_eq!(queue.remaining(), 2);
    }

    #[test]
    fn first_error_wins() {
        let mut queue = EventQueue::new([Event::plain("x")]);
        let mut context = Context::new(&mut queue);
        let first = context.consume(EventKind::SequenceStart, None).unwrap_err();
        let returned = context.fail(Error::MissingField("later"));
        assert_eq!(returned, first);
        assert_eq!(context.error(), Some(&first));
    }

    #[test]
    fn exhausted_source_reports_no_event() {
        let mut queue = EventQueue::new([]);
        let mut context = Context::new(&mut queue);
        assert_eq!(
            context.consume(EventKind::StreamEnd, None),
            Err(Error::mismatch(EventKind::StreamEnd, EventKind::NoEvent))
        );
        assert_eq!(context.last_kind(), Some(EventKind::NoEvent));
    }

    #[test]
    fn visitor_runs_only_on_match() {
        let mut value = 0.0;
        let mut queue = EventQueue::new([Event::MappingEnd]);
        let mut context = Context::new(&mut queue);
        assert!(context
            .consume(EventKind::Scalar, Some(Visitor::Double(&mut value)))
            .is_err());
        assert_eq!(value, 0.0);
    }

    #[test]
    fn visitor_error_becomes_sticky() {
        let mut value = 1.5;
        let mut queue = EventQueue::new([Event::plain("abc"), Event::plain("2.5")]);
        let mut context = Context::new(&mut queue);
        let error = context
            .consume(EventKind::Scalar, Some(Visitor::Double(&mut value)))
            .unwrap_err();
        assert_eq!(error.to_string(), "error converting 'abc' to double");

        // Second scalar is never pulled
        assert_eq!(
            context.consume(EventKind::Scalar, Some(Visitor::Double(&mut value))),
            Err(error)
        );
        assert_eq!(value, 1.5);
        assert_eq!(queue.pulled(), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "visitor passed for non-scalar MAPPING_START")]
    fn visitor_on_structural_event_is_rejected() {
        let mut queue = EventQueue::new([Event::MappingStart]);
        let mut context = Context::new(&mut queue);
        let mut value = String::new();
        let _ = context.consume(EventKind::MappingStart, Some(Visitor::String(&mut value)));
    }

    #[test]
    fn peek_leaves_event_in_place() {
        let mut queue = EventQueue::new([Event::SequenceEnd]);
        let mut context = Context::new(&mut queue);
        assert_eq!(context.peek_kind(), Ok(EventKind::SequenceEnd));
        assert_eq!(context.peek_kind(), Ok(EventKind::SequenceEnd));
        assert_eq!(context.consume(EventKind::SequenceEnd, None), Ok(()));
        assert_eq!(context.peek_kind(), Ok(EventKind::NoEvent));
        assert_eq!(queue.pulled(), 1);
    }

    #[test]
    fn options_are_carried() {
        let mut queue = EventQueue::new([]);
        let context = Context::with_options(&mut queue, Options::new().with_max_number_len(8));
        assert_eq!(context.options().max_number_len, 8);
    }
}
