// SPDX-License-Identifier: Apache-2.0

//! Event-driven deserialization for hand-written schema routines.
//!
//! A pull parser produces a flat stream of events. A schema routine walks
//! that stream through a [`Context`], asserting the shape it expects one
//! event at a time and extracting typed values from scalars. The first
//! mismatch is kept as a sticky error and every later step returns it
//! without touching the source.
//!
//! ```
//! use serdec::{Context, Deserialize, Error, EventSource};
//!
//! struct Foo {
//!     investigator: String,
//!     exposure_time: f64,
//! }
//!
//! impl Deserialize for Foo {
//!     fn deserialize<S: EventSource + ?Sized>(context: &mut Context<'_, S>) -> Result<Self, Error> {
//!         let mut foo = Foo { investigator: String::new(), exposure_time: 0.0 };
//!         context.mapping_start()?;
//!         context.field_name("investigator")?;
//!         context.deserialize_string(&mut foo.investigator)?;
//!         context.field_name("exposure_time")?;
//!         context.deserialize_f64(&mut foo.exposure_time)?;
//!         context.mapping_end()?;
//!         Ok(foo)
//!     }
//! }
//!
//! let foo: Foo = serdec::from_str("investigator: 'Ethan D. Twardy'\nexposure_time: 0.001\n").unwrap();
//! assert_eq!(foo.investigator, "Ethan D. Twardy");
//! assert_eq!(foo.exposure_time, 0.001);
//! ```

mod context;
pub use context::Context;

mod document;
pub use document::{from_source, from_source_with_options, read_document, Deserialize};
#[cfg(feature = "yaml")]
pub use document::{from_slice, from_str, from_str_with_options};

mod error;
pub use error::{Error, ErrorCategory};

mod event;
pub use event::{Event, EventKind, Mark, ScalarStyle};

mod helpers;

mod options;
pub use options::{Options, DEFAULT_MAX_NUMBER_LEN};

mod source;
pub use source::{EventQueue, EventSource};

mod visitor;
pub use visitor::Visitor;

#[cfg(feature = "yaml")]
mod yaml_source;
#[cfg(feature = "yaml")]
pub use yaml_source::YamlSource;
