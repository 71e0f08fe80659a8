//! Batch prediction for [`LinearPredictor`](crate::repr::LinearPredictor).

use ndarray::{Array1, ArrayView2, Axis, s};
use rayon::prelude::*;

use crate::data::DataVector;
use crate::repr::LinearPredictor;
use crate::utils::Parallelism;

/// Extension trait for scoring many feature vectors at once.
pub trait LinearPredictorBatch {
    /// Score each feature vector. Sequential.
    ///
    /// Returns one score per input, in input order.
    fn predict_batch<V>(&self, rows: &[V]) -> Array1<f64>
    where
        V: DataVector + Sync;

    /// Score each feature vector with explicit parallelism control.
    fn predict_batch_with<V>(&self, rows: &[V], parallelism: Parallelism) -> Array1<f64>
    where
        V: DataVector + Sync;

    /// Score the rows of a sample-major matrix `[n_samples, n_features]`.
    ///
    /// Columns past the predictor dimension are ignored; a matrix narrower than
    /// the dimension scores only the columns it has. Results agree with
    /// [`LinearPredictor::predict`] on each row up to summation order.
    fn predict_dense(&self, data: ArrayView2<'_, f64>) -> Array1<f64>;

    /// [`predict_dense`](Self::predict_dense) with explicit parallelism control.
    fn predict_dense_with(&self, data: ArrayView2<'_, f64>, parallelism: Parallelism)
    -> Array1<f64>;
}

impl LinearPredictorBatch for LinearPredictor {
    fn predict_batch<V>(&self, rows: &[V]) -> Array1<f64>
    where
        V: DataVector + Sync,
    {
        self.predict_batch_with(rows, Parallelism::Sequential)
    }

    fn predict_batch_with<V>(&self, rows: &[V], parallelism: Parallelism) -> Array1<f64>
    where
        V: DataVector + Sync,
    {
        log::debug!(
            "scoring {} feature vectors (dim {}, {:?})",
            rows.len(),
            self.dimension(),
            parallelism
        );
        Array1::from_vec(parallelism.maybe_par_map(rows, |row| self.predict(row)))
    }

    fn predict_dense(&self, data: ArrayView2<'_, f64>) -> Array1<f64> {
        self.predict_dense_with(data, Parallelism::Sequential)
    }

    fn predict_dense_with(
        &self,
        data: ArrayView2<'_, f64>,
        parallelism: Parallelism,
    ) -> Array1<f64> {
        let n_cols = data.ncols().min(self.dimension());
        let weights = self.weights();
        let weights = weights.slice(s![..n_cols]);
        let data = data.slice(s![.., ..n_cols]);
        let bias = self.bias();

        log::debug!(
            "scoring dense matrix {:?} (dim {}, {:?})",
            data.dim(),
            self.dimension(),
            parallelism
        );

        match parallelism {
            // data [n_samples, n_cols] · weights [n_cols] → [n_samples]
            Parallelism::Sequential => data.dot(&weights) + bias,
            Parallelism::Parallel => {
                let scores: Vec<f64> = data
                    .axis_iter(Axis(0))
                    .into_par_iter()
                    .map(|row| row.dot(&weights) + bias)
                    .collect();
                Array1::from_vec(scores)
            }
        }
    }
}
