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
use rand::Rng;
use rand::seq::SliceRandom;

use super::error::SplitError;

/// `(x_train, x_test, y_train, y_test)` as returned by [`train_test_split`].
pub type Split = (Array2<f64>, Array2<f64>, Array1<u8>, Array1<u8>);

/// Randomly partitions a dataset into training and test subsets.
///
/// The test side receives `round(test_fraction * n)` rows (at least one, and
/// at least one row is left for training); feature/label index
/// correspondence is preserved within each side.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<u8>,
    test_fraction: f64,
) -> Result<Split, SplitError> {
    train_test_split_with_rng(x, y, test_fraction, &mut rand::thread_rng())
}

/// Same as [`train_test_split`] but drawing the shuffle from the caller's
/// RNG, so a seeded `StdRng` yields a reproducible partition.
pub fn train_test_split_with_rng<R: Rng + ?Sized>(
    x: &Array2<f64>,
    y: &Array1<u8>,
    test_fraction: f64,
    rng: &mut R,
) -> Result<Split, SplitError> {
    if x.nrows() != y.len() {
        return Err(SplitError::DimensionMismatch { features: x.nrows(), labels: y.len() });
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(SplitError::InvalidFraction { fraction: test_fraction });
    }
    let n = x.nrows();
    if n < 2 {
        return Err(SplitError::TooFewSamples { n });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let n_test = ((n as f64) * test_fraction).round() as usize;
    let n_test = n_test.clamp(1, n - 1);
    let (test_indices, train_indices) = indices.split_at(n_test);

    Ok((
        x.select(Axis(0), train_indices),
        x.select(Axis(0), test_indices),
        y.select(Axis(0), train_indices),
        y.select(Axis(0), test_indices),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Row i holds the value i in every feature, label = i % 2, so alignment
    // survives any permutation check.
    fn tagged_dataset(n: usize) -> (Array2<f64>, Array1<u8>) {
        let x = Array2::from_shape_fn((n, 3), |(i, _)| i as f64);
        let y = Array1::from_iter((0..n).map(|i| (i % 2) as u8));
        (x, y)
    }

    #[test]
    fn test_split_sizes_match_fraction() {
        let (x, y) = tagged_dataset(10);
        let (x_train, x_test, y_train, y_test) =
            train_test_split_with_rng(&x, &y, 0.4, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(x_test.nrows(), 4);
        assert_eq!(x_train.nrows(), 6);
        assert_eq!(y_test.len(), 4);
        assert_eq!(y_train.len(), 6);
    }

    #[test]
    fn test_split_preserves_feature_label_alignment() {
        let (x, y) = tagged_dataset(25);
        let (x_train, x_test, y_train, y_test) =
            train_test_split_with_rng(&x, &y, 0.4, &mut StdRng::seed_from_u64(42)).unwrap();

        for (row, &label) in x_train.outer_iter().zip(y_train.iter()) {
            assert_eq!((row[0] as usize % 2) as u8, label, "Training pair out of alignment");
        }
        for (row, &label) in x_test.outer_iter().zip(y_test.iter()) {
            assert_eq!((row[0] as usize % 2) as u8, label, "Test pair out of alignment");
        }
    }

    #[test]
    fn test_split_covers_every_row_exactly_once() {
        let (x, y) = tagged_dataset(12);
        let (x_train, x_test, _, _) =
            train_test_split_with_rng(&x, &y, 0.25, &mut StdRng::seed_from_u64(3)).unwrap();

        let mut seen: Vec<usize> = x_train
            .outer_iter()
            .chain(x_test.outer_iter())
            .map(|row| row[0] as usize)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_split_is_deterministic() {
        let (x, y) = tagged_dataset(20);
        let a = train_test_split_with_rng(&x, &y, 0.4, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = train_test_split_with_rng(&x, &y, 0.4, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
        assert_eq!(a.2, b.2);
        assert_eq!(a.3, b.3);
    }

    #[test]
    fn test_invalid_fraction() {
        let (x, y) = tagged_dataset(4);
        for fraction in [0.0, 1.0, -0.2, 1.5] {
            let result = train_test_split(&x, &y, fraction);
            assert!(matches!(result, Err(SplitError::InvalidFraction { .. })));
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let (x, _) = tagged_dataset(4);
        let y = Array1::from_vec(vec![0u8, 1, 0]);
        let result = train_test_split(&x, &y, 0.4);
        assert!(matches!(
            result,
            Err(SplitError::DimensionMismatch { features: 4, labels: 3 })
        ));
    }

    #[test]
    fn test_too_few_samples() {
        let (x, y) = tagged_dataset(1);
        let result = train_test_split(&x, &y, 0.4);
        assert!(matches!(result, Err(SplitError::TooFewSamples { n: 1 })));
    }
}
