//! Core trait for feature-vector access.
//!
//! [`LinearPredictor::weighted_elements`]: crate::repr::LinearPredictor::weighted_elements

use ndarray::Array1;

// ============================================================================
// IndexValue
// ============================================================================

/// A single stored entry of a feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexValue {
    /// Feature index.
    pub index: usize,
    /// Feature value.
    pub value: f64,
}

impl IndexValue {
    #[inline]
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }
}

impl From<(usize, f64)> for IndexValue {
    #[inline]
    fn from((index, value): (usize, f64)) -> Self {
        Self { index, value }
    }
}

// ============================================================================
// DataVector Trait
// ============================================================================

/// Read-only access to the non-zero entries of a feature vector.
///
/// Abstracts over encodings (dense, sparse, binary indicator). Every entry not
/// yielded by [`nonzeros`](Self::nonzeros) is an implicit zero.
///
/// # Contract
///
/// - Built-in encodings yield entries in strictly increasing index order.
///   Scoring does not rely on it; [`LinearPredictor::weighted_elements`]
///   sorts and merges entries from implementations that do not.
/// - Sparse encodings may yield explicitly stored zeros; they contribute
///   nothing to any sum.
///
/// Consumers take `V: DataVector + ?Sized` generically so the hot loop is
/// monomorphized per encoding.
pub trait DataVector {
    /// Iterate the stored (non-zero) entries in increasing index order.
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_;

    /// Number of stored entries.
    fn num_nonzeros(&self) -> usize {
        self.nonzeros().count()
    }

    /// One past the largest stored index, or 0 for the zero vector.
    fn prefix_length(&self) -> usize {
        self.nonzeros()
            .map(|entry| entry.index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Dot product with a dense weight slice.
    ///
    /// Entries whose index falls outside `weights` are ignored.
    #[inline]
    fn dot(&self, weights: &[f64]) -> f64 {
        self.nonzeros()
            .filter_map(|IndexValue { index, value }| weights.get(index).map(|w| w * value))
            .sum()
    }

    /// Materialize the first `len` entries as a dense array.
    fn to_dense(&self, len: usize) -> Array1<f64> {
        let mut dense = Array1::zeros(len);
        for IndexValue { index, value } in self.nonzeros() {
            if index < len {
                dense[index] = value;
            }
        }
        dense
    }
}

impl<T: DataVector + ?Sized> DataVector for &T {
    #[inline]
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        (**self).nonzeros()
    }

    #[inline]
    fn num_nonzeros(&self) -> usize {
        (**self).num_nonzeros()
    }

    #[inline]
    fn prefix_length(&self) -> usize {
        (**self).prefix_length()
    }

    #[inline]
    fn dot(&self, weights: &[f64]) -> f64 {
        (**self).dot(weights)
    }
}

// ============================================================================
// Plain dense containers
// ============================================================================

/// Non-zero entries of a dense slice.
#[derive(Debug, Clone)]
pub struct DenseNonZeros<'a> {
    values: std::slice::Iter<'a, f64>,
    next_index: usize,
}

impl<'a> DenseNonZeros<'a> {
    #[inline]
    pub(crate) fn new(values: &'a [f64]) -> Self {
        Self {
            values: values.iter(),
            next_index: 0,
        }
    }
}

impl Iterator for DenseNonZeros<'_> {
    type Item = IndexValue;

    #[inline]
    fn next(&mut self) -> Option<IndexValue> {
        loop {
            let value = *self.values.next()?;
            let index = self.next_index;
            self.next_index += 1;
            // NaN compares unequal to zero and is yielded, so it propagates
            if value != 0.0 {
                return Some(IndexValue { index, value });
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.values.len()))
    }
}

impl DataVector for [f64] {
    #[inline]
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        DenseNonZeros::new(self)
    }
}

impl DataVector for Vec<f64> {
    #[inline]
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        DenseNonZeros::new(self)
    }
}

impl DataVector for Array1<f64> {
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, value)| **value != 0.0)
            .map(|(index, &value)| IndexValue { index, value })
    }
}
