//! Inference helpers layered over the predictor representations.
//!
//! Single-vector scoring lives on the representation itself
//! ([`LinearPredictor::predict`](crate::repr::LinearPredictor::predict)); this
//! module adds batch scoring over many feature vectors or a dense matrix.
//!
//! # Quick Start
//!
//! ```
//! use ndarray::array;
//! use predictors::inference::LinearPredictorBatch;
//! use predictors::repr::LinearPredictor;
//!
//! let predictor = LinearPredictor::from_parts(vec![0.5, 0.3], 0.1);
//! let scores = predictor.predict_dense(array![[2.0, 3.0], [1.0, 1.0]].view());
//! assert_eq!(scores.len(), 2);
//! ```

mod linear;

pub use linear::LinearPredictorBatch;
