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

pub mod csv;
pub mod error;
pub mod split;

pub use self::csv::SessionLoader;
pub use split::{train_test_split, train_test_split_with_rng};

use ndarray::{Array1, Array2};

/// A trait for loading session data from files into a feature matrix and a
/// binary label vector.
///
/// Implementors read a file from a given path and return a 2D feature array
/// (`Array2<f64>`) of shape `(n_rows, n_features)` together with a 1D label
/// array (`Array1<u8>`) of length `n_rows`, where `labels[i]` is the outcome
/// of the session encoded in `features.row(i)`. The trait is generic over an
/// associated error type, allowing each implementation to define its own
/// specific errors.
pub trait DataLoader {
    /// Loads data from a file into a feature matrix and label vector.
    ///
    /// # Parameters
    /// - `path`: The path to the data file, accepting any type that implements `AsRef<Path>`.
    ///
    /// # Returns
    /// A `Result` containing:
    /// - On success: A tuple `(features, labels)` where `features` is an `Array2<f64>`
    ///   of shape `(n_rows, n_features)` and `labels` is an `Array1<u8>` of length `n_rows`.
    /// - On error: An error of type `Self::Error` specific to the implementation.
    fn load<P: AsRef<std::path::Path>>(path: P) -> Result<(Array2<f64>, Array1<u8>), Self::Error>;

    /// The error type returned by the `load` method.
    type Error: std::error::Error + 'static;
}

/// Loads data from a file using a specified `DataLoader` implementation.
///
/// Convenience wrapper that delegates to `T::load`, propagating whatever
/// error type the loader defines.
pub fn load_data<T: DataLoader, P: AsRef<std::path::Path>>(
    path: P,
) -> Result<(Array2<f64>, Array1<u8>), T::Error> {
    T::load(path)
}
