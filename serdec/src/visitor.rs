// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::options::Options;

/// Interprets a matched scalar into a typed destination.
///
/// The set of visitors is closed. A visitor only ever sees scalar text: the
/// consumer checks the event type before handing the scalar over. A failed
/// visit leaves the destination untouched.
#[derive(Debug)]
pub enum Visitor<'d> {
    /// Checks that the scalar is exactly this field name.
    FieldName(&'d str),
    /// Copies the scalar into a newly allocated string.
    String(&'d mut String),
    /// Parses the scalar as a double.
    Double(&'d mut f64),
    /// Parses the scalar as a signed integer.
    Integer(&'d mut i64),
    /// Parses the scalar as a boolean.
    Bool(&'d mut bool),
}

impl Visitor<'_> {
    /// Runs this visitor against `scalar`.
    pub fn visit(self, scalar: &str, options: &Options) -> Result<(), Error> {
        match self {
            Visitor::FieldName(expected) => visit_field_name(expected, scalar),
            Visitor::String(dest) => {
                *dest = copy_scalar(scalar)?;
                Ok(())
            }
            Visitor::Double(dest) => {
                *dest = parse_double(scalar, options)?;
                Ok(())
            }
            Visitor::Integer(dest) => {
                *dest = parse_integer(scalar, options)?;
                Ok(())
            }
            Visitor::Bool(dest) => {
                *dest = parse_bool(scalar)?;
                Ok(())
            }
        }
    }
}

fn visit_field_name(expected: &str, scalar: &str) -> Result<(), Error> {
    // Whole-string equality; a shared prefix is not a match
    if expected == scalar {
        Ok(())
    } else {
        Err(Error::FieldName {
            expected: expected.to_owned(),
            found: scalar.to_owned(),
        })
    }
}

/// Copies scalar text into a string sized exactly for it.
pub(crate) fn copy_scalar(scalar: &str) -> Result<String, Error> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(scalar.len())
        .map_err(|_| Error::Allocation { len: scalar.len() })?;
    owned.push_str(scalar);
    Ok(owned)
}

fn check_number_len(scalar: &str, options: &Options) -> Result<(), Error> {
    if scalar.len() > options.max_number_len {
        return Err(Error::TooLong {
            max: options.max_number_len,
        });
    }
    Ok(())
}

fn conversion_error(scalar: &str, target: &'static str) -> Error {
    Error::Conversion {
        token: scalar.to_owned(),
        target,
    }
}

/// Parses a double from the whole of `scalar`.
///
/// Rust's float grammar is locale-independent and rejects trailing
/// characters. On top of it the YAML spellings of infinity and NaN are
/// accepted, while Rust-only spellings (`inf`, `NaN`, `infinity`) are not.
pub(crate) fn parse_double(scalar: &str, options: &Options) -> Result<f64, Error> {
    check_number_len(scalar, options)?;
    match scalar {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => return Ok(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => return Ok(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return Ok(f64::NAN),
        _ => {}
    }
    let digits = scalar.trim_start_matches(['+', '-']);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(conversion_error(scalar, "double"));
    }
    scalar
        .parse::<f64>()
        .map_err(|_| conversion_error(scalar, "double"))
}

/// Parses a signed integer: decimal with optional sign, `0x` hex or `0o`
/// octal.
pub(crate) fn parse_integer(scalar: &str, options: &Options) -> Result<i64, Error> {
    check_number_len(scalar, options)?;
    let parsed = if let Some(hex) = scalar.strip_prefix("0x") {
        radix_digits(hex, 16)
    } else if let Some(octal) = scalar.strip_prefix("0o") {
        radix_digits(octal, 8)
    } else {
        scalar.parse::<i64>().ok()
    };
    parsed.ok_or_else(|| conversion_error(scalar, "integer"))
}

/// Digits after a radix prefix. No sign is allowed there.
fn radix_digits(digits: &str, radix: u32) -> Option<i64> {
    if !digits.starts_with(|c: char| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

pub(crate) fn parse_bool(scalar: &str) -> Result<bool, Error> {
    match scalar {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(conversion_error(scalar, "bool")),
    }
}
