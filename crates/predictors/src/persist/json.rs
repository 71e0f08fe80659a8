//! JSON encoding of predictor records.
//!
//! Floats are written with the shortest representation that parses back to
//! the same bits, and parsed with `float_roundtrip`, so weights survive a
//! write/read cycle bit-for-bit. NaN and infinities have no JSON form and are
//! rejected at write time.

use std::io::{Read, Write};

use bon::Builder;
use serde_json::Value;

use super::error::{ReadError, WriteError};
use super::schema::{PredictorKind, PredictorSchema};

/// Options for writing JSON records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct JsonWriteOptions {
    /// Indent output for human readers.
    #[builder(default)]
    pub pretty: bool,
}

impl Default for JsonWriteOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl JsonWriteOptions {
    /// Single-line output.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self::builder().pretty(true).build()
    }
}

/// Reject values JSON cannot represent.
fn check_finite(schema: &PredictorSchema) -> Result<(), WriteError> {
    match schema {
        PredictorSchema::LinearPredictor(record) => {
            if let Some((i, &value)) = record.w.iter().enumerate().find(|(_, w)| !w.is_finite()) {
                return Err(WriteError::NonFinite {
                    field: format!("w[{i}]"),
                    value,
                });
            }
            if !record.b.is_finite() {
                return Err(WriteError::NonFinite {
                    field: "b".into(),
                    value: record.b,
                });
            }
        }
    }
    Ok(())
}

pub(crate) fn write_json<W: Write>(
    writer: W,
    schema: &PredictorSchema,
    options: &JsonWriteOptions,
) -> Result<(), WriteError> {
    check_finite(schema)?;
    if options.pretty {
        serde_json::to_writer_pretty(writer, schema)?;
    } else {
        serde_json::to_writer(writer, schema)?;
    }
    Ok(())
}

pub(crate) fn to_json_string(
    schema: &PredictorSchema,
    options: &JsonWriteOptions,
) -> Result<String, WriteError> {
    check_finite(schema)?;
    let json = if options.pretty {
        serde_json::to_string_pretty(schema)?
    } else {
        serde_json::to_string(schema)?
    };
    Ok(json)
}

/// Parse a record, resolving its tag before its fields.
///
/// With `expected` set, a record of any other known kind is a
/// [`ReadError::TypeMismatch`].
pub(crate) fn parse_value(
    value: Value,
    expected: Option<PredictorKind>,
) -> Result<PredictorSchema, ReadError> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ReadError::MissingTypeTag)?;
    let kind =
        PredictorKind::from_type_name(tag).ok_or_else(|| ReadError::UnknownType(tag.to_owned()))?;
    if let Some(expected) = expected {
        if expected != kind {
            return Err(ReadError::TypeMismatch {
                expected,
                actual: kind,
            });
        }
    }
    Ok(serde_json::from_value(value)?)
}

pub(crate) fn read_json<R: Read>(
    reader: R,
    expected: Option<PredictorKind>,
) -> Result<PredictorSchema, ReadError> {
    let value: Value = serde_json::from_reader(reader)?;
    parse_value(value, expected)
}

pub(crate) fn from_json_str(
    json: &str,
    expected: Option<PredictorKind>,
) -> Result<PredictorSchema, ReadError> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(value, expected)
}
