//! predictors: sparse-aware linear scoring for Rust.
//!
//! A [`LinearPredictor`] holds a fixed-length weight vector and a bias and
//! scores feature vectors as `bias + Σ w[i] * x[i]`. Feature vectors may be
//! dense, sparse, binary, or chosen automatically; indices past the
//! predictor's dimension are ignored.
//!
//! # Key Types
//!
//! - [`LinearPredictor`] - Weights + bias with predict, decomposition, scale, reset
//! - [`DataVector`] - Read-only view over non-zero feature entries
//! - [`SparseVector`] / [`DenseVector`] / [`BinaryVector`] / [`AutoDataVector`] - Encodings
//! - [`Archivable`] / [`Predictor`] - JSON and binary persistence
//!
//! # Batch Scoring
//!
//! See [`inference::LinearPredictorBatch`] for scoring many rows, optionally
//! in parallel via [`Parallelism`].

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod inference;
pub mod persist;
pub mod repr;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{
    AutoDataVector, AutoVectorConfig, BinaryVector, DataVector, DataVectorError, DenseVector,
    IndexValue, SparseVector,
};
pub use inference::LinearPredictorBatch;
pub use persist::{Archivable, Predictor, ReadError, WriteError};
pub use repr::LinearPredictor;
pub use utils::Parallelism;
