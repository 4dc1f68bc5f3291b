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

use std::fs::File;
use std::path::Path;

use ndarray::{Array1, Array2};

use super::DataLoader;
use super::error::LoadError;

/// Names of the 17 session feature columns, in the order they occupy in the
/// feature matrix. Columns are resolved by name from the CSV header, so the
/// file may order them freely as long as all of them are present.
pub const FEATURE_COLUMNS: [&str; 17] = [
    "Administrative",
    "Administrative_Duration",
    "Informational",
    "Informational_Duration",
    "ProductRelated",
    "ProductRelated_Duration",
    "BounceRates",
    "ExitRates",
    "PageValues",
    "SpecialDay",
    "Month",
    "OperatingSystems",
    "Browser",
    "Region",
    "TrafficType",
    "VisitorType",
    "Weekend",
];

/// Column holding the purchase outcome; becomes the binary label.
pub const LABEL_COLUMN: &str = "Revenue";

// Month abbreviations as the dataset spells them ("June" is written out,
// the rest are three letters). Index = zero-based month number.
const MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "June", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

const INT_COLUMNS: [&str; 7] = [
    "Administrative",
    "Informational",
    "ProductRelated",
    "OperatingSystems",
    "Browser",
    "Region",
    "TrafficType",
];

/// Loader for shopping-session CSV files.
///
/// Each row describes one session; the 17 feature columns are coerced to
/// `f64` according to their semantic type (counts and categorical codes as
/// integers, durations and rates as floats, month names through a fixed
/// lookup table, visitor-type and weekend flags by exact string equality)
/// and the `Revenue` column becomes the 0/1 label.
pub struct SessionLoader;

impl DataLoader for SessionLoader {
    type Error = LoadError;

    fn load<P: AsRef<Path>>(path: P) -> Result<(Array2<f64>, Array1<u8>), LoadError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| LoadError::FileOpen { path: path.to_path_buf(), source })?;
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = rdr.headers()?.clone();
        let column_index = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn { name: name.to_string() })
        };
        let mut feature_indices = [0usize; 17];
        for (slot, name) in FEATURE_COLUMNS.iter().enumerate() {
            feature_indices[slot] = column_index(name)?;
        }
        let label_index = column_index(LABEL_COLUMN)?;

        let mut features: Vec<f64> = Vec::new();
        let mut labels: Vec<u8> = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let row = i + 1;
            for (&name, &idx) in FEATURE_COLUMNS.iter().zip(feature_indices.iter()) {
                let value = record.get(idx).unwrap_or("");
                features.push(coerce_field(name, value, row)?);
            }
            labels.push(u8::from(record.get(label_index).unwrap_or("") == "TRUE"));
        }

        if labels.is_empty() {
            return Err(LoadError::EmptyFile);
        }

        let n_rows = labels.len();
        let features = Array2::from_shape_vec((n_rows, FEATURE_COLUMNS.len()), features)?;
        Ok((features, Array1::from_vec(labels)))
    }
}

fn month_index(name: &str) -> Option<f64> {
    MONTHS.iter().position(|&m| m == name).map(|i| i as f64)
}

/// Coerces one raw field to its numeric value.
///
/// The flag columns compare against their exact literal ("Returning_Visitor",
/// "TRUE"); any other string, including case variants, yields 0.
fn coerce_field(column: &str, value: &str, row: usize) -> Result<f64, LoadError> {
    match column {
        "Month" => month_index(value)
            .ok_or_else(|| LoadError::UnknownMonth { value: value.to_string(), row }),
        "VisitorType" => Ok(if value == "Returning_Visitor" { 1.0 } else { 0.0 }),
        "Weekend" => Ok(if value == "TRUE" { 1.0 } else { 0.0 }),
        c if INT_COLUMNS.contains(&c) => {
            value.parse::<i64>().map(|v| v as f64).map_err(|source| LoadError::InvalidInteger {
                column: column.to_string(),
                value: value.to_string(),
                row,
                source,
            })
        }
        _ => value.parse::<f64>().map_err(|source| LoadError::InvalidFloat {
            column: column.to_string(),
            value: value.to_string(),
            row,
            source,
        }),
    }
}
