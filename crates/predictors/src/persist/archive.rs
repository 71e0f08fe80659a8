//! The [`Archivable`] trait: JSON and binary I/O for persistable predictors.

use std::io::{Read, Write};

use super::error::{ReadError, WriteError};
use super::json::{self, JsonWriteOptions};
use super::native::{self, BinaryReadOptions, BinaryWriteOptions};
use super::schema::{PredictorKind, PredictorSchema};

/// A type that can be written to and read back from an archive.
///
/// Implementors only map to and from [`PredictorSchema`]; the codecs are
/// provided. Writing then reading returns a value equal bit-for-bit to the
/// original (JSON requires finite values).
///
/// # Example
///
/// ```
/// use predictors::persist::{Archivable, JsonWriteOptions};
/// use predictors::repr::LinearPredictor;
///
/// let predictor = LinearPredictor::from_parts(vec![1.0, 2.0, 3.0], 0.5);
/// let json = predictor.to_json_string(&JsonWriteOptions::compact()).unwrap();
/// assert_eq!(json, r#"{"type":"LinearPredictor","w":[1.0,2.0,3.0],"b":0.5}"#);
///
/// let restored = LinearPredictor::from_json_str(&json).unwrap();
/// assert_eq!(restored, predictor);
/// ```
pub trait Archivable: Sized {
    /// Kind this type reads, or `None` if it accepts any known kind.
    const KIND: Option<PredictorKind>;

    /// Convert to the persisted record.
    fn to_schema(&self) -> PredictorSchema;

    /// Build from a persisted record.
    fn from_schema(schema: PredictorSchema) -> Result<Self, ReadError>;

    /// Write as a JSON record.
    fn write_json_into<W: Write>(
        &self,
        writer: W,
        options: &JsonWriteOptions,
    ) -> Result<(), WriteError> {
        let schema = self.to_schema();
        json::write_json(writer, &schema, options)?;
        log::debug!(
            "wrote {} JSON record: dim {}",
            schema.kind().type_name(),
            schema.dimension()
        );
        Ok(())
    }

    /// Read a JSON record.
    fn read_json_from<R: Read>(reader: R) -> Result<Self, ReadError> {
        let schema = json::read_json(reader, Self::KIND)?;
        log::debug!(
            "read {} JSON record: dim {}",
            schema.kind().type_name(),
            schema.dimension()
        );
        Self::from_schema(schema)
    }

    /// Encode as a JSON string.
    fn to_json_string(&self, options: &JsonWriteOptions) -> Result<String, WriteError> {
        json::to_json_string(&self.to_schema(), options)
    }

    /// Decode a JSON string.
    fn from_json_str(json: &str) -> Result<Self, ReadError> {
        Self::from_schema(json::from_json_str(json, Self::KIND)?)
    }

    /// Write as a binary archive.
    fn write_into<W: Write>(
        &self,
        mut writer: W,
        options: &BinaryWriteOptions,
    ) -> Result<(), WriteError> {
        native::write_archive(&mut writer, &self.to_schema(), options)
    }

    /// Read a binary archive.
    fn read_from<R: Read>(mut reader: R, options: &BinaryReadOptions) -> Result<Self, ReadError> {
        Self::from_schema(native::read_archive(&mut reader, Self::KIND, options)?)
    }

    /// Encode as binary archive bytes with default options.
    fn to_bytes(&self) -> Result<Vec<u8>, WriteError> {
        let mut buf = Vec::new();
        self.write_into(&mut buf, &BinaryWriteOptions::default())?;
        Ok(buf)
    }

    /// Decode binary archive bytes with default options.
    fn from_bytes(bytes: &[u8]) -> Result<Self, ReadError> {
        Self::read_from(bytes, &BinaryReadOptions::default())
    }
}
