//! Error types for bilan.
//!
//! Validation failures are fatal and carry enough detail for the CLI to pick
//! an exit code. Numeric anomalies (zero denominators, NaN inputs) are never
//! errors; they flow through the ratio table as non-finite values.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for bilan operations.
#[derive(Debug, Error)]
pub enum BilanError {
    /// The input path does not resolve to a readable file.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// One or more required columns are absent, in canonical order.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl BilanError {
    /// Returns the missing column names if this is a schema error.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            Self::MissingColumns(columns) => Some(columns),
            _ => None,
        }
    }
}

/// A specialized Result type for bilan operations.
pub type Result<T> = std::result::Result<T, BilanError>;
