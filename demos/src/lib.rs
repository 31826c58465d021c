// SPDX-License-Identifier: Apache-2.0

//! Hand-written schema routines for two record shapes, used by the `demos`
//! binary and its tests.

mod foo;
pub use foo::Foo;

mod schema;
pub use schema::{Schema, SchemaProperties};
