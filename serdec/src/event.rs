// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

/// The type tag of a parse event.
///
/// `NoEvent` never comes out of a source; the consumer reports it when the
/// source has nothing left to give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The source was exhausted.
    NoEvent,
    /// Start of the YAML stream.
    StreamStart,
    /// End of the YAML stream.
    StreamEnd,
    /// Start of a document (`---`, explicit or implicit).
    DocumentStart,
    /// End of a document (`...`, explicit or implicit).
    DocumentEnd,
    /// A reference to an anchored node (`*name`).
    Alias,
    /// A leaf value.
    Scalar,
    /// Start of a sequence.
    SequenceStart,
    /// End of a sequence.
    SequenceEnd,
    /// Start of a mapping.
    MappingStart,
    /// End of a mapping.
    MappingEnd,
}

impl EventKind {
    /// The upper-snake name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::NoEvent => "NO_EVENT",
            EventKind::StreamStart => "STREAM_START",
            EventKind::StreamEnd => "STREAM_END",
            EventKind::DocumentStart => "DOCUMENT_START",
            EventKind::DocumentEnd => "DOCUMENT_END",
            EventKind::Alias => "ALIAS",
            EventKind::Scalar => "SCALAR",
            EventKind::SequenceStart => "SEQUENCE_START",
            EventKind::SequenceEnd => "SEQUENCE_END",
            EventKind::MappingStart => "MAPPING_START",
            EventKind::MappingEnd => "MAPPING_END",
        }
    }

    /// True for the events that open a nested collection.
    pub const fn is_collection_start(self) -> bool {
        matches!(self, EventKind::SequenceStart | EventKind::MappingStart)
    }

    /// True for the events that close a nested collection.
    pub const fn is_collection_end(self) -> bool {
        matches!(self, EventKind::SequenceEnd | EventKind::MappingEnd)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a scalar was written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    /// Unquoted.
    #[default]
    Plain,
    /// `'single quoted'`
    SingleQuoted,
    /// `"double quoted"`
    DoubleQuoted,
    /// Literal block (`|`).
    Literal,
    /// Folded block (`>`).
    Folded,
}

/// One event of a pull-parse stream.
///
/// Lifetime `'a` is the input lifetime: scalar text is borrowed from the
/// input whenever the parser did not have to unescape or fold it.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<'a> {
    /// Start of the YAML stream.
    StreamStart,
    /// End of the YAML stream.
    StreamEnd,
    /// Start of a document.
    DocumentStart,
    /// End of a document.
    DocumentEnd,
    /// A reference to the node anchored with the given id.
    Alias(usize),
    /// A leaf value and the style it was written in.
    Scalar(Cow<'a, str>, ScalarStyle),
    /// Start of a sequence.
    SequenceStart,
    /// End of a sequence.
    SequenceEnd,
    /// Start of a mapping.
    MappingStart,
    /// End of a mapping.
    MappingEnd,
}

impl<'a> Event<'a> {
    /// Shorthand for a plain scalar, mostly useful when scripting event streams.
    pub fn plain(value: impl Into<Cow<'a, str>>) -> Self {
        Event::Scalar(value.into(), ScalarStyle::Plain)
    }

    /// The type tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StreamStart => EventKind::StreamStart,
            Event::StreamEnd => EventKind::StreamEnd,
            Event::DocumentStart => EventKind::DocumentStart,
            Event::DocumentEnd => EventKind::DocumentEnd,
            Event::Alias(_) => EventKind::Alias,
            Event::Scalar(..) => EventKind::Scalar,
            Event::SequenceStart => EventKind::SequenceStart,
            Event::SequenceEnd => EventKind::SequenceEnd,
            Event::MappingStart => EventKind::MappingStart,
            Event::MappingEnd => EventKind::MappingEnd,
        }
    }

    /// The scalar text, if this is a scalar event.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Event::Scalar(value, _) => Some(&**value),
            _ => None,
        }
    }
}

/// A position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mark {
    /// Byte offset from the start of the input.
    pub index: usize,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column.
    pub col: usize,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.col + 1)
    }
}
