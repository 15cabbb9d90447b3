//! Error types for report output.

use thiserror::Error;

/// Errors that can occur while writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook could not be built or saved.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Chart could not be drawn or encoded.
    #[error("Chart error: {0}")]
    Chart(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// A specialized Result type for report output.
pub type Result<T> = std::result::Result<T, ReportError>;
