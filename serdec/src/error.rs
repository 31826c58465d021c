// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::event::{EventKind, Mark};

/// Errors that can occur while deserializing from an event stream.
///
/// Only the first error of a pass is ever reported; see [`crate::Context`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The next event did not have the type the schema expected at this point.
    #[error("expected {expected}, but found {found}")]
    Mismatch {
        /// What the schema routine asked for.
        expected: EventKind,
        /// What the source produced.
        found: EventKind,
    },
    /// A mapping key did not match the key expected at this ordered position.
    #[error("expected field '{expected}', got field '{found}'")]
    FieldName {
        /// The declared field name.
        expected: String,
        /// The key present in the input.
        found: String,
    },
    /// A numeric scalar was longer than [`crate::Options::max_number_len`].
    #[error("field exceeds maximum length ({max})")]
    TooLong {
        /// The configured bound.
        max: usize,
    },
    /// A scalar could not be interpreted as the target type.
    #[error("error converting '{token}' to {target}")]
    Conversion {
        /// The offending scalar text.
        token: String,
        /// Name of the target type (`double`, `integer`, `bool`).
        target: &'static str,
    },
    /// Copying a scalar failed because memory could not be reserved.
    #[error("failed to allocate {len} bytes for scalar")]
    Allocation {
        /// Size of the scalar that was being copied.
        len: usize,
    },
    /// The underlying parser rejected the input text.
    #[error("syntax error: {message}")]
    Syntax {
        /// The parser's own description.
        message: String,
        /// Where the parser gave up, when it knows.
        mark: Option<Mark>,
    },
    /// The input bytes were not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] core::str::Utf8Error),
    /// A keyed record routine reached the end of its mapping without seeing
    /// a required field.
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    /// A keyed record routine saw the same field twice.
    #[error("duplicate field '{0}'")]
    DuplicateField(&'static str),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Event type disagreed with the schema.
    Structural,
    /// Mapping key disagreed with the schema, or was missing or repeated.
    FieldName,
    /// Scalar text could not become the target type.
    Value,
    /// Memory could not be reserved.
    Resource,
    /// The event source itself failed.
    Source,
    /// The input was unusable before any event was read.
    Input,
}

impl Error {
    /// Shorthand for a structural mismatch.
    pub fn mismatch(expected: EventKind, found: EventKind) -> Self {
        Error::Mismatch { expected, found }
    }

    /// Which of the broad failure classes this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Mismatch { .. } => ErrorCategory::Structural,
            Error::FieldName { .. } | Error::MissingField(_) | Error::DuplicateField(_) => {
                ErrorCategory::FieldName
            }
            Error::TooLong { .. } | Error::Conversion { .. } => ErrorCategory::Value,
            Error::Allocation { .. } => ErrorCategory::Resource,
            Error::Syntax { .. } => ErrorCategory::Source,
            Error::InvalidUtf8(_) => ErrorCategory::Input,
        }
    }
}

#[cfg(feature = "yaml")]
impl From<saphyr_parser::ScanError> for Error {
    fn from(err: saphyr_parser::ScanError) -> Self {
        let marker = err.marker();
        Error::Syntax {
            message: err.to_string(),
            mark: Some(Mark {
                index: marker.index(),
                line: marker.line(),
                col: marker.col(),
            }),
        }
    }
}
