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

use ndarray::Array1;

use crate::errors::MetricsError;

/// Sensitivity/specificity pair for a set of binary predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// True positive rate: fraction of actual positives predicted positive.
    pub sensitivity: f64,
    /// True negative rate: fraction of actual negatives predicted negative.
    pub specificity: f64,
}

/// Compares predicted labels against true labels.
///
/// Labels equal to 1 count as actual positives; everything else counts as an
/// actual negative, matching the reference confusion-matrix arithmetic.
/// When a class is entirely absent from `labels`, the corresponding rate is
/// the IEEE 0/0 result, NaN — there is no meaningful rate for a class that
/// never occurred, and NaN cannot be mistaken for a real score of 0.
pub fn evaluate(
    labels: &Array1<u8>,
    predictions: &Array1<u8>,
) -> Result<Evaluation, MetricsError> {
    if labels.len() != predictions.len() {
        return Err(MetricsError::LengthMismatch {
            labels: labels.len(),
            predictions: predictions.len(),
        });
    }

    let mut positives = 0usize;
    let mut negatives = 0usize;
    let mut true_positives = 0usize;
    let mut true_negatives = 0usize;
    for (&label, &prediction) in labels.iter().zip(predictions.iter()) {
        if label == 1 {
            positives += 1;
            if prediction == 1 {
                true_positives += 1;
            }
        } else {
            negatives += 1;
            if label == 0 && prediction == 0 {
                true_negatives += 1;
            }
        }
    }

    Ok(Evaluation {
        sensitivity: true_positives as f64 / positives as f64,
        specificity: true_negatives as f64 / negatives as f64,
    })
}
