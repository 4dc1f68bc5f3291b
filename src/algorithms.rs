// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use ndarray::{Array1, Array2, Axis};

use crate::errors::ModelError;

pub struct KnnBuilder {
    k: usize,
}

impl KnnBuilder {
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn build(self) -> Knn {
        Knn { k: self.k, x_train: None, y_train: None }
    }
}

/// A k-nearest-neighbor classifier over binary labels.
///
/// Distances are Euclidean in the raw, unscaled feature space; with `k = 1`
/// the prediction is exactly the label of the single nearest training
/// sample. Fitting stores the training set; there is no training loop.
pub struct Knn {
    k: usize,
    x_train: Option<Array2<f64>>,
    y_train: Option<Array1<u8>>,
}

impl Knn {
    pub fn new() -> KnnBuilder {
        KnnBuilder { k: 1 }
    }

    /// Stores the training data after validating it.
    ///
    /// # Parameters
    /// - `x`: Feature matrix, one row per sample.
    /// - `y`: Binary labels, index-aligned with the rows of `x`.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<u8>) -> Result<(), ModelError> {
        if x.ncols() == 0 {
            return Err(ModelError::NoFeatures);
        }
        if x.is_empty() || y.is_empty() {
            return Err(ModelError::EmptyInput);
        }
        if x.nrows() != y.len() {
            return Err(ModelError::DimensionMismatch { expected: x.nrows(), actual: y.len() });
        }
        if self.k == 0 || self.k > x.nrows() {
            return Err(ModelError::InvalidNeighborCount { k: self.k, n_samples: x.nrows() });
        }

        self.x_train = Some(x.clone());
        self.y_train = Some(y.clone());
        Ok(())
    }

    /// Predicts a label for every row of `x` by majority vote over the `k`
    /// nearest training samples. Ties resolve to the negative class; no tie
    /// is possible for odd `k`.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<u8>, ModelError> {
        let x_train = self.x_train.as_ref().ok_or(ModelError::NotFitted)?;
        let y_train = self.y_train.as_ref().ok_or(ModelError::NotFitted)?;

        if x.is_empty() {
            return Err(ModelError::EmptyInput);
        }
        if x.ncols() != x_train.ncols() {
            return Err(ModelError::DimensionMismatch {
                expected: x_train.ncols(),
                actual: x.ncols(),
            });
        }

        let mut predictions = Vec::with_capacity(x.nrows());
        for row in x.axis_iter(Axis(0)) {
            let distances = Array1::from_iter(x_train.axis_iter(Axis(0)).map(|v| {
                let squared_sum = ndarray::Zip::from(v).and(row).fold(0.0, |acc, &v_i, &row_i| {
                    let diff = v_i - row_i;
                    acc + diff * diff
                });
                squared_sum.sqrt()
            }));

            let mut indices: Vec<(usize, f64)> =
                distances.iter().enumerate().map(|(i, &d)| (i, d)).collect();
            indices.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            let positives = indices
                .iter()
                .take(self.k)
                .filter(|&&(idx, _)| y_train[idx] == 1)
                .count();
            predictions.push(u8::from(positives * 2 > self.k));
        }
        Ok(Array1::from_vec(predictions))
    }
}
