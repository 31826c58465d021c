// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use saphyr_parser::{Event as YamlEvent, Marker, Parser, ScalarStyle as YamlStyle, StrInput};

use crate::error::Error;
use crate::event::{Event, EventKind, Mark, ScalarStyle};
use crate::source::EventSource;

/// Event source over YAML text, backed by `saphyr-parser`.
///
/// Anchors are reported but not resolved: an alias comes through as
/// [`Event::Alias`] carrying the anchor id.
pub struct YamlSource<'input> {
    parser: Parser<'input, StrInput<'input>>,
    mark: Option<Mark>,
}

impl<'input> YamlSource<'input> {
    /// Opens a source over `input`. Nothing is parsed until the first pull.
    ///
    /// # Example
    /// ```
    /// use serdec::{Event, EventSource, YamlSource};
    /// let mut source = YamlSource::new("key: value");
    /// assert_eq!(source.next_event().unwrap(), Some(Event::StreamStart));
    /// ```
    pub fn new(input: &'input str) -> Self {
        Self {
            parser: Parser::new_from_str(input),
            mark: None,
        }
    }
}

impl EventSource for YamlSource<'_> {
    fn next_event(&mut self) -> Result<Option<Event<'_>>, Error> {
        loop {
            let Some(next) = self.parser.next_event() else {
                return Ok(None);
            };
            let (event, span) = next?;
            self.mark = Some(mark_from(&span.start));
            let empty = span.start.index() == span.end.index();
            if let Some(event) = translate(event, empty) {
                log::trace!("yaml event {:?} at {:?}", event.kind(), self.mark);
                return Ok(Some(event));
            }
        }
    }

    fn peek_kind(&mut self) -> Result<Option<EventKind>, Error> {
        loop {
            let peeked = match self.parser.peek() {
                None => return Ok(None),
                Some(Ok((event, _))) => kind_of(event),
                Some(Err(err)) => return Err(Error::from(err.clone())),
            };
            match peeked {
                Some(kind) => return Ok(Some(kind)),
                // Internal placeholder events carry nothing for us
                None => {
                    self.parser.next_event();
                }
            }
        }
    }

    fn mark(&self) -> Option<Mark> {
        self.mark
    }
}

fn mark_from(marker: &Marker) -> Mark {
    Mark {
        index: marker.index(),
        line: marker.line(),
        col: marker.col(),
    }
}

fn kind_of(event: &YamlEvent<'_>) -> Option<EventKind> {
    let kind = match event {
        YamlEvent::Nothing => return None,
        YamlEvent::StreamStart => EventKind::StreamStart,
        YamlEvent::StreamEnd => EventKind::StreamEnd,
        YamlEvent::DocumentStart(_) => EventKind::DocumentStart,
        YamlEvent::DocumentEnd => EventKind::DocumentEnd,
        YamlEvent::Alias(_) => EventKind::Alias,
        YamlEvent::Scalar(..) => EventKind::Scalar,
        YamlEvent::SequenceStart(..) => EventKind::SequenceStart,
        YamlEvent::SequenceEnd => EventKind::SequenceEnd,
        YamlEvent::MappingStart(..) => EventKind::MappingStart,
        YamlEvent::MappingEnd => EventKind::MappingEnd,
    };
    Some(kind)
}

/// `empty` is true for a zero-width span. The parser fills an empty node
/// with a plain `~`, which is reported here as the empty string it stands for.
fn translate(event: YamlEvent<'_>, empty: bool) -> Option<Event<'_>> {
    let event = match event {
        YamlEvent::Nothing => return None,
        YamlEvent::StreamStart => Event::StreamStart,
        YamlEvent::StreamEnd => Event::StreamEnd,
        YamlEvent::DocumentStart(_) => Event::DocumentStart,
        YamlEvent::DocumentEnd => Event::DocumentEnd,
        YamlEvent::Alias(id) => Event::Alias(id),
        YamlEvent::Scalar(value, YamlStyle::Plain, _anchor, _tag) if empty && value == "~" => {
            Event::Scalar(Cow::Borrowed(""), ScalarStyle::Plain)
        }
        YamlEvent::Scalar(value, style, _anchor, _tag) => Event::Scalar(value, translate_style(style)),
        YamlEvent::SequenceStart(..) => Event::SequenceStart,
        YamlEvent::SequenceEnd => Event::SequenceEnd,
        YamlEvent::MappingStart(..) => Event::MappingStart,
        YamlEvent::MappingEnd => Event::MappingEnd,
    };
    Some(event)
}

fn translate_style(style: YamlStyle) -> ScalarStyle {
    match style {
        YamlStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        YamlStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        YamlStyle::Literal => ScalarStyle::Literal,
        YamlStyle::Folded => ScalarStyle::Folded,
        _ => ScalarStyle::Plain,
    }
}
