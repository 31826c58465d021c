// SPDX-License-Identifier: Apache-2.0

use serdec::{Context, Deserialize, Error, EventSource};

/// A two-field record read in declared order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Foo {
    pub investigator: String,
    pub exposure_time: f64,
}

impl Foo {
    /// Reads a complete YAML document holding one `Foo`.
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        serdec::from_str(text)
    }

    /// Empties the owned fields. Safe to call more than once.
    pub fn release(&mut self) {
        drop(core::mem::take(&mut self.investigator));
    }
}

impl Deserialize for Foo {
    fn deserialize<S: EventSource + ?Sized>(context: &mut Context<'_, S>) -> Result<Self, Error> {
        let mut foo = Foo::default();
        context.mapping_start()?;
        context.field_name("investigator")?;
        context.deserialize_string(&mut foo.investigator)?;
        context.field_name("exposure_time")?;
        context.deserialize_f64(&mut foo.exposure_time)?;
        context.mapping_end()?;
        Ok(foo)
    }
}
