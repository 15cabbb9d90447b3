//! Required-column contract for financial statement input.

use crate::{BilanError, FinancialStatements, Result};

/// Columns every statement table must carry, in canonical order.
///
/// `inventory` is part of the contract even though no ratio reads it.
pub const REQUIRED_COLUMNS: [&str; 15] = [
    "period",
    "revenue",
    "cogs",
    "operating_income",
    "net_income",
    "total_assets",
    "total_equity",
    "total_liabilities",
    "current_assets",
    "current_liabilities",
    "cash",
    "marketable_securities",
    "accounts_receivable",
    "inventory",
    "interest_expense",
];

/// Returns the required columns absent from `columns`, in canonical order.
///
/// Only names are checked. A present column full of nulls or text passes.
///
/// # Example
///
/// ```
/// use bilan_types::missing_columns;
///
/// let missing = missing_columns(["period", "revenue"]);
/// assert_eq!(missing.len(), 13);
/// assert_eq!(missing[0], "cogs");
/// ```
pub fn missing_columns<I, S>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let present: Vec<S> = columns.into_iter().collect();
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !present.iter().any(|c| c.as_ref() == **required))
        .map(|required| required.to_string())
        .collect()
}

/// Validates a statement table and returns its missing required columns.
///
/// An empty result means the table can be handed to the ratio engine.
pub fn validate(statements: &FinancialStatements) -> Vec<String> {
    missing_columns(statements.columns())
}

/// Like [`validate`], but turns a non-empty result into
/// [`BilanError::MissingColumns`].
pub fn ensure_schema(statements: &FinancialStatements) -> Result<()> {
    let missing = validate(statements);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(BilanError::MissingColumns(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn full_frame() -> DataFrame {
        let columns: Vec<Column> = REQUIRED_COLUMNS
            .iter()
            .map(|name| {
                if *name == "period" {
                    Column::new((*name).into(), ["2021"])
                } else {
                    Column::new((*name).into(), [1.0])
                }
            })
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_complete_schema_is_valid() {
        let statements = FinancialStatements::new(full_frame());
        assert!(validate(&statements).is_empty());
        assert!(ensure_schema(&statements).is_ok());
    }

    #[test]
    fn test_missing_single_column() {
        let df = full_frame().drop("cogs").unwrap();
        let statements = FinancialStatements::new(df);
        assert_eq!(validate(&statements), vec!["cogs".to_string()]);
    }

    #[test]
    fn test_missing_columns_keep_canonical_order() {
        let df = full_frame().drop_many(["interest_expense", "period", "cash"]);
        let statements = FinancialStatements::new(df);
        assert_eq!(
            validate(&statements),
            vec![
                "period".to_string(),
                "cash".to_string(),
                "interest_expense".to_string()
            ]
        );
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let mut df = full_frame();
        df.with_column(Column::new("segment".into(), ["retail"])).unwrap();
        assert!(validate(&FinancialStatements::new(df)).is_empty());
    }

    #[test]
    fn test_empty_table_misses_everything() {
        let missing = missing_columns(Vec::<String>::new());
        assert_eq!(missing, REQUIRED_COLUMNS.map(String::from).to_vec());
    }

    #[test]
    fn test_ensure_schema_error() {
        let df = full_frame().drop("inventory").unwrap();
        let err = ensure_schema(&FinancialStatements::new(df)).unwrap_err();
        assert_eq!(err.missing_columns(), Some(&["inventory".to_string()][..]));
    }
}
