//! Binary indicator vector: a set of indices whose value is 1.

use super::error::DataVectorError;
use super::traits::{DataVector, IndexValue};

/// Indicator vector. Every stored index has value `1.0`, all others are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryVector {
    /// Set indices (strictly increasing).
    indices: Vec<usize>,
}

impl BinaryVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an unordered collection of set indices.
    ///
    /// Repeated indices collapse into one.
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Set an index past the current last one.
    pub fn append(&mut self, index: usize) -> Result<(), DataVectorError> {
        if let Some(&last) = self.indices.last() {
            if index <= last {
                return Err(DataVectorError::IndexOrder { index, last });
            }
        }
        self.indices.push(index);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> BinaryIter<'_> {
        BinaryIter(self.indices.iter())
    }
}

/// Iterator over the set entries of a [`BinaryVector`].
#[derive(Debug, Clone)]
pub struct BinaryIter<'a>(std::slice::Iter<'a, usize>);

impl Iterator for BinaryIter<'_> {
    type Item = IndexValue;

    #[inline]
    fn next(&mut self) -> Option<IndexValue> {
        self.0.next().map(|&index| IndexValue { index, value: 1.0 })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for BinaryIter<'_> {}

impl DataVector for BinaryVector {
    #[inline]
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        self.iter()
    }

    #[inline]
    fn num_nonzeros(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    fn prefix_length(&self) -> usize {
        self.indices.last().map_or(0, |&last| last + 1)
    }

    #[inline]
    fn dot(&self, weights: &[f64]) -> f64 {
        self.indices.iter().filter_map(|&i| weights.get(i)).sum()
    }
}
