//! Testing utilities.
//!
//! Seeded generators for feature vectors and predictors, plus tolerances for
//! comparing scores. Used by unit tests, integration tests, and benches.
//!
//! ```
//! use predictors::testing::{random_predictor, random_sparse_vector};
//!
//! let predictor = random_predictor(100, 42);
//! let x = random_sparse_vector(120, 10, 7);
//! let _score = predictor.predict(&x);
//! ```

mod data;

pub use data::{random_dense_vector, random_predictor, random_sparse_vector, random_weights};

/// Default absolute tolerance for score comparisons where values are O(1).
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Tolerance scaled to the magnitude of the compared values.
///
/// Sums of `n` products accumulate rounding error proportional to the sum of
/// absolute terms; this returns a bound suitable for comparing two such sums
/// computed in different orders.
pub fn summation_tolerance(abs_terms_sum: f64, n_terms: usize) -> f64 {
    let n = n_terms.max(1) as f64;
    DEFAULT_TOLERANCE + 4.0 * n * f64::EPSILON * abs_terms_sum
}
