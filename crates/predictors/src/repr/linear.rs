//! Linear predictor data structure and scoring.

use ndarray::{ArrayView1, ArrayViewMut1};

use crate::data::{DataVector, IndexValue, SparseVector};

/// Linear binary predictor (weights + bias).
///
/// Scores a feature vector as
///
/// ```text
/// bias + Σ weights[i] * x[i]     over stored entries of x with i < dimension
/// ```
///
/// Feature indices at or past [`dimension`](Self::dimension) are ignored, so a
/// predictor can score vectors from a wider feature space.
///
/// The dimension is fixed at construction: mutable access goes through
/// fixed-length views, and [`reset`](Self::reset) keeps the length.
///
/// # Example
///
/// ```
/// use predictors::data::SparseVector;
/// use predictors::repr::LinearPredictor;
///
/// let predictor = LinearPredictor::from_parts(vec![1.0, 2.0, 3.0], 0.5);
/// let x = SparseVector::from_pairs([(1, 1.0)]).unwrap();
///
/// assert_eq!(predictor.predict(&x), 2.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearPredictor {
    /// One weight per feature; the length is the dimension.
    weights: Vec<f64>,
    bias: f64,
}

impl LinearPredictor {
    /// Create a zero predictor with the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            weights: vec![0.0; dimension],
            bias: 0.0,
        }
    }

    /// Create a predictor from explicit weights and bias.
    ///
    /// The dimension is `weights.len()`.
    pub fn from_parts(weights: impl Into<Vec<f64>>, bias: f64) -> Self {
        Self {
            weights: weights.into(),
            bias,
        }
    }

    /// Split into weights and bias.
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        (self.weights, self.bias)
    }

    /// Number of weights.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Weight vector as an ndarray view.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.weights.as_slice())
    }

    /// Mutable view of the weight vector. The length cannot change.
    #[inline]
    pub fn weights_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        ArrayViewMut1::from(self.weights.as_mut_slice())
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Get a single weight.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= dimension()`.
    #[inline]
    pub fn weight(&self, feature: usize) -> f64 {
        self.weights[feature]
    }

    /// Set a single weight.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= dimension()`.
    #[inline]
    pub fn set_weight(&mut self, feature: usize, value: f64) {
        self.weights[feature] = value;
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    #[inline]
    pub fn bias_mut(&mut self) -> &mut f64 {
        &mut self.bias
    }

    #[inline]
    pub fn set_bias(&mut self, value: f64) {
        self.bias = value;
    }

    /// Score a feature vector.
    ///
    /// Cost is proportional to the number of stored entries in `x`, not to the
    /// dimension.
    #[inline]
    pub fn predict<V: DataVector + ?Sized>(&self, x: &V) -> f64 {
        self.bias + x.dot(&self.weights)
    }

    /// Per-feature contributions `weights[i] * x[i]`.
    ///
    /// The result has the sparsity pattern of `x` restricted to indices below
    /// the dimension; a zero weight yields an explicitly stored zero. The values
    /// sum to `predict(x) - bias()`.
    ///
    /// Entries of `x` that come out of index order are sorted, and repeated
    /// indices are merged by summing their contributions.
    pub fn weighted_elements<V: DataVector + ?Sized>(&self, x: &V) -> SparseVector {
        let mut ordered = true;
        let mut pairs: Vec<(usize, f64)> = Vec::with_capacity(x.num_nonzeros());
        for IndexValue { index, value } in x.nonzeros() {
            let Some(w) = self.weights.get(index) else {
                continue;
            };
            if pairs.last().is_some_and(|&(prev, _)| prev >= index) {
                ordered = false;
            }
            pairs.push((index, w * value));
        }

        if !ordered {
            pairs = merge_by_index(pairs);
        }
        let (indices, values) = pairs.into_iter().unzip();
        SparseVector::from_parts_unchecked(indices, values)
    }

    /// Multiply every weight and the bias by `scalar`.
    pub fn scale(&mut self, scalar: f64) {
        log::trace!("scaling linear predictor (dim {}) by {scalar}", self.dimension());
        self.weights.iter_mut().for_each(|w| *w *= scalar);
        self.bias *= scalar;
    }

    /// Zero every weight and the bias. The dimension is unchanged.
    pub fn reset(&mut self) {
        self.weights.fill(0.0);
        self.bias = 0.0;
    }
}

/// Sort pairs by index, summing values that share an index.
fn merge_by_index(mut pairs: Vec<(usize, f64)>) -> Vec<(usize, f64)> {
    pairs.sort_by_key(|&(index, _)| index);
    let mut merged: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
    for (index, value) in pairs {
        match merged.last_mut() {
            Some((prev, acc)) if *prev == index => *acc += value,
            _ => merged.push((index, value)),
        }
    }
    merged
}
