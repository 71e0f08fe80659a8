//! Automatically encoded feature vector.
//!
//! [`AutoDataVector`] inspects the values it is built from and stores them in
//! the most compact encoding:
//!
//! - every non-zero equals `1.0` → [`BinaryVector`]
//! - few non-zeros relative to the prefix length → [`SparseVector`]
//! - otherwise → [`DenseVector`]

use bon::Builder;

use super::binary::{BinaryIter, BinaryVector};
use super::dense::DenseVector;
use super::error::DataVectorError;
use super::sparse::{SparseIter, SparseVector};
use super::traits::{DataVector, DenseNonZeros, IndexValue};

/// Controls encoding selection for [`AutoDataVector`].
#[derive(Clone, Debug, Builder)]
pub struct AutoVectorConfig {
    /// Store sparsely when `nnz / prefix_length` is below this ratio (default: 0.5).
    #[builder(default = 0.5)]
    pub sparsity_threshold: f64,
    /// Allow the binary encoding when all non-zeros are `1.0` (default: true).
    #[builder(default = true)]
    pub allow_binary: bool,
}

impl Default for AutoVectorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Which encoding an [`AutoDataVector`] picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoVectorKind {
    Dense,
    Sparse,
    Binary,
}

/// Feature vector that picks its own encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum AutoDataVector {
    Dense(DenseVector),
    Sparse(SparseVector),
    Binary(BinaryVector),
}

impl Default for AutoDataVector {
    fn default() -> Self {
        Self::Sparse(SparseVector::new())
    }
}

impl AutoDataVector {
    /// Encode dense values with the default configuration.
    pub fn from_dense(values: &[f64]) -> Self {
        Self::from_dense_with(values, &AutoVectorConfig::default())
    }

    /// Encode dense values.
    pub fn from_dense_with(values: &[f64], config: &AutoVectorConfig) -> Self {
        let (indices, nz_values): (Vec<usize>, Vec<f64>) = values
            .nonzeros()
            .map(|IndexValue { index, value }| (index, value))
            .unzip();
        match choose_kind(&nz_values, indices.last().map_or(0, |&l| l + 1), config) {
            AutoVectorKind::Binary => Self::Binary(BinaryVector::from_indices(indices)),
            AutoVectorKind::Sparse => {
                Self::Sparse(SparseVector::from_parts_unchecked(indices, nz_values))
            }
            AutoVectorKind::Dense => {
                let prefix = indices.last().map_or(0, |&l| l + 1);
                Self::Dense(DenseVector::new(values[..prefix].to_vec()))
            }
        }
    }

    /// Encode unordered `(index, value)` pairs with the default configuration.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, DataVectorError>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        Self::from_pairs_with(pairs, &AutoVectorConfig::default())
    }

    /// Encode unordered `(index, value)` pairs. Zero values are dropped.
    pub fn from_pairs_with<I>(pairs: I, config: &AutoVectorConfig) -> Result<Self, DataVectorError>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let sparse =
            SparseVector::from_pairs(pairs.into_iter().filter(|&(_, value)| value != 0.0))?;
        let kind = choose_kind(sparse.values(), sparse.prefix_length(), config);
        Ok(match kind {
            AutoVectorKind::Binary => {
                Self::Binary(BinaryVector::from_indices(sparse.indices().iter().copied()))
            }
            AutoVectorKind::Sparse => Self::Sparse(sparse),
            AutoVectorKind::Dense => {
                Self::Dense(DenseVector::new(sparse.to_dense(sparse.prefix_length()).to_vec()))
            }
        })
    }

    pub fn kind(&self) -> AutoVectorKind {
        match self {
            Self::Dense(_) => AutoVectorKind::Dense,
            Self::Sparse(_) => AutoVectorKind::Sparse,
            Self::Binary(_) => AutoVectorKind::Binary,
        }
    }

    #[inline]
    pub fn iter(&self) -> AutoIter<'_> {
        match self {
            Self::Dense(v) => AutoIter::Dense(v.iter()),
            Self::Sparse(v) => AutoIter::Sparse(v.iter()),
            Self::Binary(v) => AutoIter::Binary(v.iter()),
        }
    }
}

fn choose_kind(nz_values: &[f64], prefix_length: usize, config: &AutoVectorConfig) -> AutoVectorKind {
    let kind = if nz_values.is_empty() {
        AutoVectorKind::Sparse
    } else if config.allow_binary && nz_values.iter().all(|&v| v == 1.0) {
        AutoVectorKind::Binary
    } else if (nz_values.len() as f64) < config.sparsity_threshold * prefix_length as f64 {
        AutoVectorKind::Sparse
    } else {
        AutoVectorKind::Dense
    };
    log::trace!(
        "auto vector: nnz={} prefix={} -> {:?}",
        nz_values.len(),
        prefix_length,
        kind
    );
    kind
}

impl From<DenseVector> for AutoDataVector {
    fn from(v: DenseVector) -> Self {
        Self::Dense(v)
    }
}

impl From<SparseVector> for AutoDataVector {
    fn from(v: SparseVector) -> Self {
        Self::Sparse(v)
    }
}

impl From<BinaryVector> for AutoDataVector {
    fn from(v: BinaryVector) -> Self {
        Self::Binary(v)
    }
}

/// Iterator over the stored entries of an [`AutoDataVector`].
#[derive(Debug, Clone)]
pub enum AutoIter<'a> {
    Dense(DenseNonZeros<'a>),
    Sparse(SparseIter<'a>),
    Binary(BinaryIter<'a>),
}

impl Iterator for AutoIter<'_> {
    type Item = IndexValue;

    #[inline]
    fn next(&mut self) -> Option<IndexValue> {
        match self {
            Self::Dense(it) => it.next(),
            Self::Sparse(it) => it.next(),
            Self::Binary(it) => it.next(),
        }
    }
}

impl DataVector for AutoDataVector {
    #[inline]
    fn nonzeros(&self) -> impl Iterator<Item = IndexValue> + '_ {
        self.iter()
    }

    fn num_nonzeros(&self) -> usize {
        match self {
            Self::Dense(v) => v.num_nonzeros(),
            Self::Sparse(v) => v.num_nonzeros(),
            Self::Binary(v) => v.num_nonzeros(),
        }
    }

    fn prefix_length(&self) -> usize {
        match self {
            Self::Dense(v) => v.prefix_length(),
            Self::Sparse(v) => v.prefix_length(),
            Self::Binary(v) => v.prefix_length(),
        }
    }

    // Dispatch once, then run the encoding's own loop.
    #[inline]
    fn dot(&self, weights: &[f64]) -> f64 {
        match self {
            Self::Dense(v) => v.dot(weights),
            Self::Sparse(v) => v.dot(weights),
            Self::Binary(v) => v.dot(weights),
        }
    }
}
