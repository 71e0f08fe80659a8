//! Conversion between runtime types and schema types.
//!
//! Conversions are implemented as `From` traits; both directions are lossless.

use super::schema::{LinearPredictorSchema, PredictorSchema};
use crate::repr::LinearPredictor;

impl From<&LinearPredictor> for LinearPredictorSchema {
    fn from(predictor: &LinearPredictor) -> Self {
        Self {
            w: predictor.as_slice().to_vec(),
            b: predictor.bias(),
        }
    }
}

impl From<LinearPredictor> for LinearPredictorSchema {
    fn from(predictor: LinearPredictor) -> Self {
        let (w, b) = predictor.into_parts();
        Self { w, b }
    }
}

impl From<LinearPredictorSchema> for LinearPredictor {
    fn from(schema: LinearPredictorSchema) -> Self {
        LinearPredictor::from_parts(schema.w, schema.b)
    }
}

impl From<&LinearPredictor> for PredictorSchema {
    fn from(predictor: &LinearPredictor) -> Self {
        Self::LinearPredictor(predictor.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_roundtrip_is_exact() {
        let weights = vec![0.1, -0.0, f64::MIN_POSITIVE, 1e300, f64::NAN];
        let predictor = LinearPredictor::from_parts(weights, -7.25);

        let schema = LinearPredictorSchema::from(&predictor);
        assert_eq!(schema.w.len(), 5);
        assert_eq!(schema.b, -7.25);

        let restored = LinearPredictor::from(schema);
        let bits = |p: &LinearPredictor| p.as_slice().iter().map(|w| w.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&restored), bits(&predictor));
        assert_eq!(restored.bias().to_bits(), predictor.bias().to_bits());
    }

    #[test]
    fn owned_conversion_moves_weights() {
        let predictor = LinearPredictor::from_parts(vec![1.0, 2.0], 3.0);
        let schema = LinearPredictorSchema::from(predictor);
        assert_eq!(schema, LinearPredictorSchema { w: vec![1.0, 2.0], b: 3.0 });
    }

    #[test]
    fn empty_predictor() {
        let schema = PredictorSchema::from(&LinearPredictor::default());
        assert_eq!(schema.dimension(), 0);
    }
}
