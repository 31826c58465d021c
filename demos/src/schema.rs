// SPDX-License-Identifier: Apache-2.0

//! A JSON-Schema-like record read as a keyed mapping: fields may come in any
//! order, unknown keys are skipped, and every required field must appear
//! exactly once.

use std::collections::HashMap;

use serdec::{Context, Deserialize, Error, EventSource};

/// One entry of [`Schema::properties`]. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SchemaProperties {
    pub schema_ref: Option<String>,
    pub property_type: Option<String>,
    pub description: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub schema: String,
    pub id: String,
    pub tag: String,
    pub title: String,
    pub description: String,
    pub schema_type: String,
    pub properties: HashMap<String, SchemaProperties>,
    pub required: Vec<String>,
    pub additional_properties: bool,
}

/// Stores `value` in `slot` unless the key was already seen.
fn set_once<T>(slot: &mut Option<T>, key: &'static str, value: T) -> Result<(), Error> {
    if slot.is_some() {
        return Err(Error::DuplicateField(key));
    }
    *slot = Some(value);
    Ok(())
}

fn require<T>(slot: Option<T>, key: &'static str) -> Result<T, Error> {
    slot.ok_or(Error::MissingField(key))
}

/// Reads an optional string property, rejecting repeats.
fn optional_string<S: EventSource + ?Sized>(
    context: &mut Context<'_, S>,
    slot: &mut Option<String>,
    key: &'static str,
) -> Result<(), Error> {
    let value = context.string()?;
    set_once(slot, key, value).map_err(|e| context.fail(e))
}

impl Deserialize for SchemaProperties {
    fn deserialize<S: EventSource + ?Sized>(context: &mut Context<'_, S>) -> Result<Self, Error> {
        let mut properties = SchemaProperties::default();
        context.mapping_start()?;
        while let Some(key) = context.next_key()? {
            match key.as_str() {
                "$ref" => optional_string(context, &mut properties.schema_ref, "$ref")?,
                "type" => optional_string(context, &mut properties.property_type, "type")?,
                "description" => {
                    optional_string(context, &mut properties.description, "description")?
                }
                "default" => optional_string(context, &mut properties.default, "default")?,
                other => {
                    log::debug!("skipping unknown property key '{other}'");
                    context.skip_value()?;
                }
            }
        }
        Ok(properties)
    }
}

fn read_properties<S: EventSource + ?Sized>(
    context: &mut Context<'_, S>,
) -> Result<HashMap<String, SchemaProperties>, Error> {
    let mut properties = HashMap::new();
    context.mapping_start()?;
    while let Some(name) = context.next_key()? {
        let entry = SchemaProperties::deserialize(context)?;
        properties.insert(name, entry);
    }
    Ok(properties)
}

fn read_required<S: EventSource + ?Sized>(
    context: &mut Context<'_, S>,
) -> Result<Vec<String>, Error> {
    let mut required = Vec::new();
    context.sequence_start()?;
    while context.next_element()? {
        required.push(context.string()?);
    }
    Ok(required)
}

/// Keyed fields of a [`Schema`] as they are collected, before the required
/// ones are checked.
#[derive(Default)]
struct SchemaFields {
    schema: Option<String>,
    id: Option<String>,
    tag: Option<String>,
    title: Option<String>,
    description: Option<String>,
    schema_type: Option<String>,
    properties: Option<HashMap<String, SchemaProperties>>,
    required: Option<Vec<String>>,
    additional_properties: Option<bool>,
}

impl SchemaFields {
    fn build(self) -> Result<Schema, Error> {
        Ok(Schema {
            schema: require(self.schema, "$schema")?,
            id: require(self.id, "id")?,
            tag: require(self.tag, "tag")?,
            title: require(self.title, "title")?,
            description: require(self.description, "description")?,
            schema_type: require(self.schema_type, "type")?,
            properties: require(self.properties, "properties")?,
            required: require(self.required, "required")?,
            additional_properties: require(self.additional_properties, "additionalProperties")?,
        })
    }
}

impl Deserialize for Schema {
    fn deserialize<S: EventSource + ?Sized>(context: &mut Context<'_, S>) -> Result<Self, Error> {
        let mut fields = SchemaFields::default();

        context.mapping_start()?;
        while let Some(key) = context.next_key()? {
            let stored = match key.as_str() {
                "$schema" => {
                    let value = context.string()?;
                    set_once(&mut fields.schema, "$schema", value)
                }
                "id" => {
                    let value = context.string()?;
                    set_once(&mut fields.id, "id", value)
                }
                "tag" => {
                    let value = context.string()?;
                    set_once(&mut fields.tag, "tag", value)
                }
                "title" => {
                    let value = context.string()?;
                    set_once(&mut fields.title, "title", value)
                }
                "description" => {
                    let value = context.string()?;
                    set_once(&mut fields.description, "description", value)
                }
                "type" => {
                    let value = context.string()?;
                    set_once(&mut fields.schema_type, "type", value)
                }
                "properties" => {
                    let value = read_properties(context)?;
                    set_once(&mut fields.properties, "properties", value)
                }
                "required" => {
                    let value = read_required(context)?;
                    set_once(&mut fields.required, "required", value)
                }
                "additionalProperties" => {
                    let mut value = false;
                    context.deserialize_bool(&mut value)?;
                    set_once(&mut fields.additional_properties, "additionalProperties", value)
                }
                other => {
                    log::debug!("skipping unknown schema key '{other}'");
                    context.skip_value()
                }
            };
            stored.map_err(|e| context.fail(e))?;
        }

        fields.build().map_err(|e| context.fail(e))
    }
}
