use rand::prelude::*;

use crate::data::{DenseVector, SparseVector};
use crate::repr::LinearPredictor;

/// Generate `n` weights uniform in `[-1, 1)`.
pub fn random_weights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect()
}

/// Random predictor with `dimension` weights in `[-1, 1)` and bias in `[-0.5, 0.5)`.
pub fn random_predictor(dimension: usize, seed: u64) -> LinearPredictor {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Vec<f64> = (0..dimension).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect();
    let bias = rng.r#gen::<f64>() - 0.5;
    LinearPredictor::from_parts(weights, bias)
}

/// Random sparse vector with up to `nnz` distinct indices below `max_index`.
///
/// Values are uniform in `[-10, 10)`.
pub fn random_sparse_vector(max_index: usize, nnz: usize, seed: u64) -> SparseVector {
    let mut rng = StdRng::seed_from_u64(seed);
    let nnz = nnz.min(max_index);
    let mut indices = rand::seq::index::sample(&mut rng, max_index, nnz).into_vec();
    indices.sort_unstable();

    let values = indices.iter().map(|_| rng.r#gen::<f64>() * 20.0 - 10.0).collect();
    SparseVector::from_parts_unchecked(indices, values)
}

/// Random dense vector of length `len`; each entry is zero with probability
/// `zero_fraction`, otherwise uniform in `[-10, 10)`.
pub fn random_dense_vector(len: usize, zero_fraction: f64, seed: u64) -> DenseVector {
    assert!((0.0..=1.0).contains(&zero_fraction));
    let mut rng = StdRng::seed_from_u64(seed);
    let values = (0..len)
        .map(|_| {
            if rng.r#gen::<f64>() < zero_fraction {
                0.0
            } else {
                rng.r#gen::<f64>() * 20.0 - 10.0
            }
        })
        .collect();
    DenseVector::new(values)
}
