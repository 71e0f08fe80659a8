//! Dense feature vector.

use ndarray::{Array1, ArrayView1};

use super::traits::{DataVector, DenseNonZeros, IndexValue};

/// Dense vector of feature values. Zeros are skipped during iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseVector {
    values: Vec<f64>,
}

impl DenseVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// All-zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, zero past the end.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[inline]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.values.as_slice())
    }

    #[inline]
    pub fn iter(&self) -> DenseNonZeros<'_> {
        DenseNonZeros::new(&self.values)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for DenseVector {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<Array1<f64>> for DenseVector {
    fn from(values: Array1<f64>) -> Self {
        Self::new(values.iter().copied().collect())
    }
}

impl DataVector for DenseVector {
    #[inline]
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        self.iter()
    }
}
