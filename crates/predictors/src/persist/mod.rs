//! Predictor persistence.
//!
//! Two encodings share one record schema:
//!
//! - **JSON**: a record tagged with its type name,
//!   `{"type":"LinearPredictor","w":[...],"b":...}`. Human readable; finite
//!   values only.
//! - **Binary**: a 32-byte header (magic, version, kind, checksum, dimension)
//!   and a Postcard payload, optionally zstd-compressed. Any `f64` bit
//!   pattern is preserved.
//!
//! Both round-trip bit-for-bit. Use [`Archivable`] on a concrete type when
//! the stored type is known, or [`Predictor`] to dispatch on the stored tag.
//!
//! ```
//! use predictors::persist::{Archivable, BinaryReadOptions, BinaryWriteOptions, Predictor};
//! use predictors::repr::LinearPredictor;
//!
//! let predictor = LinearPredictor::from_parts(vec![1.0, 2.0, 3.0], 0.5);
//!
//! let mut buf = Vec::new();
//! predictor.write_into(&mut buf, &BinaryWriteOptions::default()).unwrap();
//!
//! let loaded = Predictor::read_from(buf.as_slice(), &BinaryReadOptions::default()).unwrap();
//! assert_eq!(loaded.type_name(), "LinearPredictor");
//! assert_eq!(loaded.into_linear(), Some(predictor));
//! ```

mod archive;
mod convert;
mod error;
mod json;
pub mod native;
mod predictor;
pub mod schema;

pub use archive::Archivable;
pub use error::{ReadError, WriteError};
pub use json::JsonWriteOptions;
pub use native::{BinaryReadOptions, BinaryWriteOptions, FormatHeader, read_header};
pub use predictor::Predictor;
pub use schema::{LinearPredictorSchema, PredictorKind, PredictorSchema};
