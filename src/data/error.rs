use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open \"{}\": {source}", .path.display())]
    FileOpen { path: PathBuf, source: std::io::Error },

    #[error("column '{name}' is missing from the header")]
    MissingColumn { name: String },

    #[error("CSV file contains no session rows")]
    EmptyFile,

    #[error("unknown month '{value}' at row {row}")]
    UnknownMonth { value: String, row: usize },

    #[error("invalid integer '{value}' in column '{column}' at row {row}: {source}")]
    InvalidInteger { column: String, value: String, row: usize, source: std::num::ParseIntError },

    #[error("invalid number '{value}' in column '{column}' at row {row}: {source}")]
    InvalidFloat { column: String, value: String, row: usize, source: std::num::ParseFloatError },

    #[error("failed to shape data into array: {0}")]
    ArrayShape(#[from] ndarray::ShapeError),

    #[error("failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("test fraction must be strictly between 0 and 1, got {fraction}")]
    InvalidFraction { fraction: f64 },

    #[error("features and labels must have the same number of rows: {features} vs {labels}")]
    DimensionMismatch { features: usize, labels: usize },

    #[error("need at least two samples to split, got {n}")]
    TooFewSamples { n: usize },
}
