//! Input loading for the bilan CLI.

use std::path::Path;

use bilan_types::{BilanError, FinancialStatements};
use polars::prelude::*;
use tracing::debug;

/// Load a statement table from a CSV file with a header row.
///
/// Column types are inferred by the reader. Numeric columns that come back as
/// strings are coerced later, when records are extracted.
pub(crate) fn load_statements(path: &Path) -> Result<FinancialStatements, BilanError> {
    if !path.is_file() {
        return Err(BilanError::InputNotFound(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded statements"
    );

    Ok(FinancialStatements::new(df))
}
