//! Schema types for predictor serialization.
//!
//! These types provide a stable serialization format independent of runtime
//! types, so the runtime representation can change without breaking archives.
//!
//! The JSON form of a record is tagged with its type name:
//!
//! ```json
//! {"type": "LinearPredictor", "w": [1.0, 2.0, 3.0], "b": 0.5}
//! ```

use serde::{Deserialize, Serialize};

/// Linear predictor record.
///
/// Both fields are required; a record missing either one is rejected rather
/// than filled with defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPredictorSchema {
    /// Weights in feature order. The length is the dimension.
    pub w: Vec<f64>,
    /// Bias.
    pub b: f64,
}

impl LinearPredictorSchema {
    /// Type name used as the record tag.
    pub const TYPE_NAME: &'static str = "LinearPredictor";
}

/// Any persisted predictor, tagged by type name.
///
/// Deserialization dispatches on the `"type"` field before the variant's own
/// fields are read. An unknown tag is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PredictorSchema {
    #[serde(rename = "LinearPredictor")]
    LinearPredictor(LinearPredictorSchema),
}

impl PredictorSchema {
    /// Kind of the contained record.
    pub fn kind(&self) -> PredictorKind {
        match self {
            Self::LinearPredictor(_) => PredictorKind::Linear,
        }
    }

    /// Number of weights in the contained record.
    pub fn dimension(&self) -> usize {
        match self {
            Self::LinearPredictor(schema) => schema.w.len(),
        }
    }
}

/// Predictor type identifier.
///
/// The discriminant is stored in binary headers; the type name tags JSON
/// records.
///
/// Typed readers reject a record of another kind with
/// [`ReadError::TypeMismatch`](super::ReadError::TypeMismatch). With a single
/// kind that branch cannot trigger yet; it exists for kinds added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PredictorKind {
    /// Linear predictor (weights + bias).
    Linear = 0,
}

impl PredictorKind {
    /// All known kinds.
    pub const ALL: [PredictorKind; 1] = [PredictorKind::Linear];

    /// Convert from u8, returning None for unknown values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Linear),
            _ => None,
        }
    }

    /// Type name used as the record tag.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Linear => LinearPredictorSchema::TYPE_NAME,
        }
    }

    /// Resolve a record tag.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }
}
