//! Canonical predictor representations.
//!
//! Types here own model parameters and implement scoring directly. Batch
//! helpers live in [`crate::inference`]; serialization in [`crate::persist`].

mod linear;

pub use linear::LinearPredictor;
