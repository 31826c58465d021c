// SPDX-License-Identifier: Apache-2.0

use crate::context::Context;
use crate::error::Error;
use crate::options::Options;
use crate::source::EventSource;

/// A data shape with a hand-written schema routine.
///
/// `deserialize` reads exactly one value at the context's current position,
/// typically a whole mapping from `mapping_start` to `mapping_end`, and
/// returns it only if every step succeeded. Because the routine never
/// returns a half-built value, a failed pass leaves the caller nothing to
/// release. Routines compose: a field whose type is another record simply
/// calls that record's `deserialize`.
///
/// # Example
/// ```
/// use serdec::{Context, Deserialize, Error, EventSource};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Deserialize for Point {
///     fn deserialize<S: EventSource + ?Sized>(context: &mut Context<'_, S>) -> Result<Self, Error> {
///         context.mapping_start()?;
///         let x = context.f64_field("x")?;
///         let y = context.f64_field("y")?;
///         context.mapping_end()?;
///         Ok(Point { x, y })
///     }
/// }
///
/// let point: Point = serdec::from_str("x: 1.5\ny: -2\n").unwrap();
/// assert_eq!((point.x, point.y), (1.5, -2.0));
/// ```
pub trait Deserialize: Sized {
    /// Reads one value of this shape from `context`.
    fn deserialize<S: EventSource + ?Sized>(context: &mut Context<'_, S>) -> Result<Self, Error>;
}

/// Runs `T`'s schema routine at the source's current position.
///
/// Nothing before or after the value is checked, so this works for a record
/// embedded in a larger document as well as for a source positioned just
/// after the document start.
pub fn from_source<T: Deserialize, S: EventSource + ?Sized>(source: &mut S) -> Result<T, Error> {
    from_source_with_options(source, Options::default())
}

/// [`from_source`] with explicit options.
pub fn from_source_with_options<T: Deserialize, S: EventSource + ?Sized>(
    source: &mut S,
    options: Options,
) -> Result<T, Error> {
    let mut context = Context::with_options(source, options);
    T::deserialize(&mut context)
}

/// Reads a complete single-document stream holding one `T`.
///
/// The source is dropped on every path out of this function, failures
/// included.
#[cfg(feature = "yaml")]
pub fn from_str<T: Deserialize>(text: &str) -> Result<T, Error> {
    from_str_with_options(text, Options::default())
}

/// [`from_str`] with explicit options.
#[cfg(feature = "yaml")]
pub fn from_str_with_options<T: Deserialize>(text: &str, options: Options) -> Result<T, Error> {
    log::debug!(
        "deserializing {} from {} bytes of YAML",
        core::any::type_name::<T>(),
        text.len()
    );
    let mut source = crate::YamlSource::new(text);
    read_document(&mut source, options)
}

/// Like [`from_str`], for input that still has to be checked for UTF-8.
#[cfg(feature = "yaml")]
pub fn from_slice<T: Deserialize>(bytes: &[u8]) -> Result<T, Error> {
    from_str(core::str::from_utf8(bytes)?)
}

/// Reads stream start, document start, one `T`, document end and stream end.
pub fn read_document<T: Deserialize, S: EventSource + ?Sized>(
    source: &mut S,
    options: Options,
) -> Result<T, Error> {
    let mut context = Context::with_options(source, options);
    context.stream_start()?;
    context.document_start()?;
    let value = T::deserialize(&mut context)?;
    context.document_end()?;
    context.stream_end()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventKind};
    use crate::source::EventQueue;
    use test_log::test;

    #[derive(Debug, PartialEq)]
    struct Pair {
        left: String,
        right: f64,
    }

    impl Deserialize for Pair {
        fn deserialize<S: EventSource + ?Sized>(
            context: &mut Context<'_, S>,
        ) -> Result<Self, Error> {
            context.mapping_start()?;
            let left = context.string_field("left")?;
            let right = context.f64_field("right")?;
            context.mapping_end()?;
            Ok(Pair { left, right })
        }
    }

    fn pair_events() -> Vec<Event<'static>> {
        vec![
            Event::MappingStart,
            Event::plain("left"),
            Event::plain("l"),
            Event::plain("right"),
            Event::plain("2"),
            Event::MappingEnd,
        ]
    }

    #[test]
    fn from_source_reads_embedded_value() {
        let mut events = pair_events();
        events.push(Event::plain("trailing"));
        let mut queue = EventQueue::new(events);
        let pair: Pair = from_source(&mut queue).unwrap();
        assert_eq!(
            pair,
            Pair {
                left: "l".into(),
                right: 2.0
            }
        );
        // Only the mapping was consumed
        assert_eq!(queue.remaining(), 1);
    }

    #[test]
    fn read_document_checks_boundaries() {
        let mut events = vec![Event::StreamStart, Event::DocumentStart];
        events.extend(pair_events());
        events.extend([Event::DocumentEnd, Event::StreamEnd]);
        let mut queue = EventQueue::new(events);
        let pair: Result<Pair, _> = read_document(&mut queue, Options::default());
        assert!(pair.is_ok());
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn read_document_stops_at_first_failure() {
        let mut events = vec![Event::StreamStart, Event::DocumentStart];
        events.extend(pair_events());
        // Second document where the stream end belongs
        events.extend([Event::DocumentEnd, Event::DocumentStart, Event::StreamEnd]);
        let mut queue = EventQueue::new(events);
        let pair: Result<Pair, _> = read_document(&mut queue, Options::default());
        assert_eq!(
            pair,
            Err(Error::mismatch(EventKind::StreamEnd, EventKind::DocumentStart))
        );
        assert_eq!(queue.remaining(), 1);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn from_str_round_trip() {
        let pair: Pair = from_str("left: 'a b'\nright: 0.5\n").unwrap();
        assert_eq!(
            pair,
            Pair {
                left: "a b".into(),
                right: 0.5
            }
        );
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn from_slice_validates_utf8() {
        let result: Result<Pair, _> = from_slice(b"left: \xff\nright: 1\n");
        assert!(matches!(result, Err(Error::InvalidUtf8(_))));

        let pair: Pair = from_slice(b"left: x\nright: 1\n").unwrap();
        assert_eq!(pair.left, "x");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn options_reach_the_visitors() {
        let result: Result<Pair, _> = from_str_with_options(
            "left: x\nright: 12345\n",
            Options::new().with_max_number_len(4),
        );
        assert_eq!(result, Err(Error::TooLong { max: 4 }));
    }
}
