//! Feature-vector abstractions.
//!
//! Predictors consume feature vectors through the [`DataVector`] capability:
//! iterate the stored `(index, value)` entries, everything else is zero.
//!
//! # Encodings
//!
//! - [`DenseVector`]: contiguous values, zeros skipped while iterating
//! - [`SparseVector`]: sorted index/value pairs
//! - [`BinaryVector`]: indicator set, every stored value is `1.0`
//! - [`AutoDataVector`]: picks one of the above from the data
//!
//! Plain `[f64]`, `Vec<f64>` and `ndarray::Array1<f64>` implement
//! [`DataVector`] as dense vectors.

mod auto;
mod binary;
mod dense;
mod error;
mod sparse;
mod traits;

pub use auto::{AutoDataVector, AutoIter, AutoVectorConfig, AutoVectorKind};
pub use binary::{BinaryIter, BinaryVector};
pub use dense::DenseVector;
pub use error::DataVectorError;
pub use sparse::{SparseIter, SparseVector};
pub use traits::{DataVector, DenseNonZeros, IndexValue};
