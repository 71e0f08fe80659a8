//! Registry of persistable predictor types.

use super::archive::Archivable;
use super::error::ReadError;
use super::schema::{PredictorKind, PredictorSchema};
use crate::data::DataVector;
use crate::repr::LinearPredictor;

/// Any predictor that can be read from an archive.
///
/// Use this when the stored type is not known up front; reading dispatches on
/// the record tag (JSON) or header kind (binary).
#[derive(Debug, Clone, PartialEq)]
pub enum Predictor {
    Linear(LinearPredictor),
}

impl Predictor {
    pub fn kind(&self) -> PredictorKind {
        match self {
            Self::Linear(_) => PredictorKind::Linear,
        }
    }

    /// Record tag of the contained predictor.
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    pub fn dimension(&self) -> usize {
        match self {
            Self::Linear(p) => p.dimension(),
        }
    }

    pub fn as_linear(&self) -> Option<&LinearPredictor> {
        match self {
            Self::Linear(p) => Some(p),
        }
    }

    pub fn into_linear(self) -> Option<LinearPredictor> {
        match self {
            Self::Linear(p) => Some(p),
        }
    }

    /// Score a feature vector with the contained predictor.
    pub fn predict<V: DataVector + ?Sized>(&self, x: &V) -> f64 {
        match self {
            Self::Linear(p) => p.predict(x),
        }
    }
}

impl From<LinearPredictor> for Predictor {
    fn from(predictor: LinearPredictor) -> Self {
        Self::Linear(predictor)
    }
}

impl Archivable for Predictor {
    const KIND: Option<PredictorKind> = None;

    fn to_schema(&self) -> PredictorSchema {
        match self {
            Self::Linear(p) => p.into(),
        }
    }

    fn from_schema(schema: PredictorSchema) -> Result<Self, ReadError> {
        match schema {
            PredictorSchema::LinearPredictor(record) => Ok(Self::Linear(record.into())),
        }
    }
}

impl Archivable for LinearPredictor {
    const KIND: Option<PredictorKind> = Some(PredictorKind::Linear);

    fn to_schema(&self) -> PredictorSchema {
        self.into()
    }

    fn from_schema(schema: PredictorSchema) -> Result<Self, ReadError> {
        match schema {
            PredictorSchema::LinearPredictor(record) => Ok(record.into()),
        }
    }
}
