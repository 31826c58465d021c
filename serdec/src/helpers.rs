// SPDX-License-Identifier: Apache-2.0

//! Named wrappers around [`Context::consume`] that schema routines are
//! written in.
//!
//! An ordered record is `mapping_start`, then `field_name` followed by one
//! `deserialize_*` call per field in declared order, then `mapping_end`.
//! Fields must appear in exactly that order. Records that accept any order
//! or optional fields loop over [`Context::next_key`] instead.

use crate::context::Context;
use crate::error::Error;
use crate::event::EventKind;
use crate::source::EventSource;
use crate::visitor::{copy_scalar, Visitor};

/// Structural helpers: assert shape, extract nothing.
impl<S: EventSource + ?Sized> Context<'_, S> {
    /// Expects the start of the stream.
    pub fn stream_start(&mut self) -> Result<(), Error> {
        self.consume(EventKind::StreamStart, None)
    }

    /// Expects the end of the stream.
    pub fn stream_end(&mut self) -> Result<(), Error> {
        self.consume(EventKind::StreamEnd, None)
    }

    /// Expects the start of a document.
    pub fn document_start(&mut self) -> Result<(), Error> {
        self.consume(EventKind::DocumentStart, None)
    }

    /// Expects the end of a document.
    pub fn document_end(&mut self) -> Result<(), Error> {
        self.consume(EventKind::DocumentEnd, None)
    }

    /// Expects the start of a mapping.
    pub fn mapping_start(&mut self) -> Result<(), Error> {
        self.consume(EventKind::MappingStart, None)
    }

    /// Expects the end of a mapping.
    pub fn mapping_end(&mut self) -> Result<(), Error> {
        self.consume(EventKind::MappingEnd, None)
    }

    /// Expects the start of a sequence.
    pub fn sequence_start(&mut self) -> Result<(), Error> {
        self.consume(EventKind::SequenceStart, None)
    }

    /// Expects the end of a sequence.
    pub fn sequence_end(&mut self) -> Result<(), Error> {
        self.consume(EventKind::SequenceEnd, None)
    }
}

/// Field helpers: a scalar expectation paired with a visitor.
impl<S: EventSource + ?Sized> Context<'_, S> {
    /// Expects a mapping key equal to `name`.
    pub fn field_name(&mut self, name: &str) -> Result<(), Error> {
        self.consume(EventKind::Scalar, Some(Visitor::FieldName(name)))
    }

    /// Reads a scalar into `value` as an owned string.
    pub fn deserialize_string(&mut self, value: &mut String) -> Result<(), Error> {
        self.consume(EventKind::Scalar, Some(Visitor::String(value)))
    }

    /// Reads a scalar into `value` as a double.
    pub fn deserialize_f64(&mut self, value: &mut f64) -> Result<(), Error> {
        self.consume(EventKind::Scalar, Some(Visitor::Double(value)))
    }

    /// Reads a scalar into `value` as a signed integer.
    pub fn deserialize_i64(&mut self, value: &mut i64) -> Result<(), Error> {
        self.consume(EventKind::Scalar, Some(Visitor::Integer(value)))
    }

    /// Reads a scalar into `value` as a boolean.
    pub fn deserialize_bool(&mut self, value: &mut bool) -> Result<(), Error> {
        self.consume(EventKind::Scalar, Some(Visitor::Bool(value)))
    }

    /// Reads a scalar and returns it as an owned string.
    pub fn string(&mut self) -> Result<String, Error> {
        let mut value = String::new();
        self.deserialize_string(&mut value)?;
        Ok(value)
    }

    /// Expects the key `name` and returns its string value.
    pub fn string_field(&mut self, name: &str) -> Result<String, Error> {
        self.field_name(name)?;
        self.string()
    }

    /// Expects the key `name` and returns its double value.
    pub fn f64_field(&mut self, name: &str) -> Result<f64, Error> {
        self.field_name(name)?;
        let mut value = 0.0;
        self.deserialize_f64(&mut value)?;
        Ok(value)
    }
}

/// Helpers for keyed mappings and sequences.
impl<S: EventSource + ?Sized> Context<'_, S> {
    /// Reads the next mapping key, or consumes the end of the mapping and
    /// returns `None`.
    pub fn next_key(&mut self) -> Result<Option<String>, Error> {
        self.consume_any(|kind, scalar| match (kind, scalar) {
            (EventKind::MappingEnd, _) => Ok(None),
            (EventKind::Scalar, Some(key)) => copy_scalar(key).map(Some),
            (found, _) => Err(Error::mismatch(EventKind::Scalar, found)),
        })
    }

    /// True if another sequence element follows. The end of the sequence is
    /// consumed when reached; an element is left for the caller to read.
    pub fn next_element(&mut self) -> Result<bool, Error> {
        match self.peek_kind()? {
            EventKind::SequenceEnd => {
                self.sequence_end()?;
                Ok(false)
            }
            EventKind::NoEvent => Err(self.fail(Error::mismatch(
                EventKind::SequenceEnd,
                EventKind::NoEvent,
            ))),
            _ => Ok(true),
        }
    }

    /// Consumes one complete value: a scalar, an alias, or a whole nested
    /// mapping or sequence.
    pub fn skip_value(&mut self) -> Result<(), Error> {
        let mut depth = 0usize;
        loop {
            let kind = self.consume_any(|kind, _| match kind {
                EventKind::Scalar
                | EventKind::Alias
                | EventKind::MappingStart
                | EventKind::SequenceStart
                | EventKind::MappingEnd
                | EventKind::SequenceEnd
                    if !(depth == 0 && kind.is_collection_end()) =>
                {
                    Ok(kind)
                }
                found => Err(Error::mismatch(EventKind::Scalar, found)),
            })?;
            if kind.is_collection_start() {
                depth += 1;
            } else if kind.is_collection_end() {
                depth -= 1;
            }
            if depth == 0 {
                return Ok(());
            }
        }
    }
}
