//! Sparse feature vector (sorted index/value pairs).

use super::error::DataVectorError;
use super::traits::{DataVector, IndexValue};

/// Sparse vector storing sorted, unique indices and their values.
///
/// Unspecified entries are zero. Explicit zeros are kept when appended, so a
/// vector derived from another one can preserve its sparsity pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    /// Stored indices (strictly increasing).
    indices: Vec<usize>,
    /// Values at those indices.
    values: Vec<f64>,
}

impl SparseVector {
    /// Create an empty (all-zero) vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty vector with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Create from parallel index/value arrays.
    ///
    /// Indices must be strictly increasing.
    pub fn from_parts(indices: Vec<usize>, values: Vec<f64>) -> Result<Self, DataVectorError> {
        if indices.len() != values.len() {
            return Err(DataVectorError::LengthMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }
        validate_increasing(&indices)?;
        Ok(Self { indices, values })
    }

    /// Create from unordered `(index, value)` pairs.
    ///
    /// Pairs are sorted by index; a repeated index is an error.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, DataVectorError>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut pairs: Vec<(usize, f64)> = pairs.into_iter().collect();
        pairs.sort_by_key(|&(index, _)| index);
        if let Some(window) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(DataVectorError::DuplicateIndex(window[0].0));
        }
        let (indices, values) = pairs.into_iter().unzip();
        Ok(Self { indices, values })
    }

    /// Build without validation. Callers guarantee strictly increasing indices.
    pub(crate) fn from_parts_unchecked(indices: Vec<usize>, values: Vec<f64>) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(validate_increasing(&indices).is_ok());
        Self { indices, values }
    }

    /// Append an entry past the current last index.
    pub fn append(&mut self, index: usize, value: f64) -> Result<(), DataVectorError> {
        if let Some(&last) = self.indices.last() {
            if index <= last {
                return Err(DataVectorError::IndexOrder { index, last });
            }
        }
        self.indices.push(index);
        self.values.push(value);
        Ok(())
    }

    /// Get value at index.
    ///
    /// Uses binary search. Returns zero if the index is not stored.
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum of the stored values.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Iterate stored entries.
    #[inline]
    pub fn iter(&self) -> SparseIter<'_> {
        SparseIter {
            indices: self.indices.iter(),
            values: self.values.iter(),
        }
    }
}

fn validate_increasing(indices: &[usize]) -> Result<(), DataVectorError> {
    for pair in indices.windows(2) {
        if pair[1] == pair[0] {
            return Err(DataVectorError::DuplicateIndex(pair[1]));
        }
        if pair[1] < pair[0] {
            return Err(DataVectorError::IndexOrder {
                index: pair[1],
                last: pair[0],
            });
        }
    }
    Ok(())
}

/// Iterator over the stored entries of a [`SparseVector`].
#[derive(Debug, Clone)]
pub struct SparseIter<'a> {
    indices: std::slice::Iter<'a, usize>,
    values: std::slice::Iter<'a, f64>,
}

impl Iterator for SparseIter<'_> {
    type Item = IndexValue;

    #[inline]
    fn next(&mut self) -> Option<IndexValue> {
        let index = *self.indices.next()?;
        let value = *self.values.next()?;
        Some(IndexValue { index, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for SparseIter<'_> {}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = IndexValue;
    type IntoIter = SparseIter<'a>;

    fn into_iter(self) -> SparseIter<'a> {
        self.iter()
    }
}

impl DataVector for SparseVector {
    #[inline]
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        self.iter()
    }

    #[inline]
    fn num_nonzeros(&self) -> usize {
        self.nnz()
    }

    #[inline]
    fn prefix_length(&self) -> usize {
        self.indices.last().map_or(0, |&last| last + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_basic() {
        let v = SparseVector::from_parts(vec![1, 3], vec![10.0, 30.0]).unwrap();
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.get(0), 0.0);
        assert_eq!(v.get(1), 10.0);
        assert_eq!(v.get(3), 30.0);
        assert_eq!(v.get(100), 0.0);
        assert_eq!(v.prefix_length(), 4);
    }

    #[test]
    fn sparse_from_parts_validates() {
        assert_eq!(
            SparseVector::from_parts(vec![0, 5, 2], vec![1.0, 2.0, 3.0]),
            Err(DataVectorError::IndexOrder { index: 2, last: 5 })
        );
        assert_eq!(
            SparseVector::from_parts(vec![0, 1, 1], vec![1.0, 2.0, 3.0]),
            Err(DataVectorError::DuplicateIndex(1))
        );
        assert_eq!(
            SparseVector::from_parts(vec![0], vec![1.0, 2.0]),
            Err(DataVectorError::LengthMismatch { indices: 1, values: 2 })
        );
    }

    #[test]
    fn sparse_from_pairs_sorts() {
        let v = SparseVector::from_pairs([(4, 4.0), (0, 1.0), (2, 2.0)]).unwrap();
        assert_eq!(v.indices(), &[0, 2, 4]);
        assert_eq!(v.values(), &[1.0, 2.0, 4.0]);

        let dup = SparseVector::from_pairs([(1, 1.0), (1, 2.0)]);
        assert_eq!(dup, Err(DataVectorError::DuplicateIndex(1)));
    }

    #[test]
    fn sparse_append_requires_increasing_index() {
        let mut v = SparseVector::new();
        v.append(2, 1.0).unwrap();
        v.append(7, 0.0).unwrap(); // explicit zero is kept
        assert_eq!(v.append(7, 1.0), Err(DataVectorError::IndexOrder { index: 7, last: 7 }));
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.prefix_length(), 8);
    }

    #[test]
    fn sparse_empty() {
        let v = SparseVector::new();
        assert!(v.is_empty());
        assert_eq!(v.prefix_length(), 0);
        assert_eq!(v.sum(), 0.0);
        assert_eq!(v.nonzeros().count(), 0);
    }

    #[test]
    fn sparse_dot_ignores_out_of_range() {
        let v = SparseVector::from_parts(vec![0, 9], vec![2.0, 100.0]).unwrap();
        assert_eq!(v.dot(&[1.5, 0.0, 0.0]), 3.0);
    }
}
