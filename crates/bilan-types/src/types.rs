//! Financial statement table and its typed rows.
//!
//! [`FinancialStatements`] wraps the raw polars `DataFrame` exactly as it was
//! read, extra columns included. [`FinancialRecord`] is the typed view of one
//! reporting period that the ratio engine works on.

use std::fmt;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{REQUIRED_COLUMNS, Result, ensure_schema};

/// A reporting period key.
///
/// Integer period columns stay numeric, so `9` sorts before `10`. Any other
/// column type is read as a text label and ordered lexicographically, which
/// matches chronological order only for ISO dates and zero-padded composite
/// keys; `"Q10-2021"` sorts before `"Q2-2021"`. A null period sorts after
/// every other key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Period {
    /// An integer key such as a fiscal year.
    Number(i64),
    /// A text key such as `"2021-Q3"` or `"2021-12-31"`.
    Label(String),
    /// A null cell in the period column.
    Missing,
}

impl Period {
    /// Creates a text period.
    pub fn new(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// Returns whether the period cell was null.
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(label) => f.write_str(label),
            Self::Missing => Ok(()),
        }
    }
}

impl From<i64> for Period {
    fn from(key: i64) -> Self {
        Self::Number(key)
    }
}

impl From<&str> for Period {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Period {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// One reporting period of financial statement line items.
///
/// No sign or range constraints apply: negative equity and losses are legal
/// states. Cells that were null or not numeric in the source table are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Reporting period label.
    pub period: Period,
    /// Total revenue.
    pub revenue: f64,
    /// Cost of goods sold.
    pub cogs: f64,
    /// Operating income (EBIT).
    pub operating_income: f64,
    /// Net income.
    pub net_income: f64,
    /// Total assets.
    pub total_assets: f64,
    /// Total shareholders' equity.
    pub total_equity: f64,
    /// Total liabilities.
    pub total_liabilities: f64,
    /// Current assets.
    pub current_assets: f64,
    /// Current liabilities.
    pub current_liabilities: f64,
    /// Cash and equivalents.
    pub cash: f64,
    /// Marketable securities.
    pub marketable_securities: f64,
    /// Accounts receivable.
    pub accounts_receivable: f64,
    /// Inventory. Carried for schema completeness; no ratio uses it.
    pub inventory: f64,
    /// Interest expense.
    pub interest_expense: f64,
}

impl FinancialRecord {
    /// Returns the numeric line item stored under a required column name.
    ///
    /// Returns `None` for `period` and for unknown names.
    pub fn line_item(&self, name: &str) -> Option<f64> {
        let value = match name {
            "revenue" => self.revenue,
            "cogs" => self.cogs,
            "operating_income" => self.operating_income,
            "net_income" => self.net_income,
            "total_assets" => self.total_assets,
            "total_equity" => self.total_equity,
            "total_liabilities" => self.total_liabilities,
            "current_assets" => self.current_assets,
            "current_liabilities" => self.current_liabilities,
            "cash" => self.cash,
            "marketable_securities" => self.marketable_securities,
            "accounts_receivable" => self.accounts_receivable,
            "inventory" => self.inventory,
            "interest_expense" => self.interest_expense,
            _ => return None,
        };
        Some(value)
    }
}

/// Container for a financial statement table.
///
/// Wraps the input `DataFrame` verbatim so the raw data can be reported
/// unchanged alongside the derived ratios.
///
/// # Expected Schema
///
/// The frame must contain every name in [`REQUIRED_COLUMNS`]. `period` may be
/// of any type that casts to a string; line items may be integer or float.
/// Additional columns are allowed and ignored by the ratio engine.
///
/// # Example
///
/// ```no_run
/// use bilan_types::FinancialStatements;
/// use polars::prelude::*;
///
/// let df = df! {
///     "period" => &["2021", "2022"],
///     "revenue" => &[100.0, 150.0],
/// }.unwrap();
///
/// let statements = FinancialStatements::new(df);
/// assert_eq!(statements.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FinancialStatements {
    data: DataFrame,
}

impl FinancialStatements {
    /// Creates a new `FinancialStatements` from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Builds a statement table holding exactly the required columns.
    ///
    /// The `period` column is integer typed unless some record carries a
    /// text label, in which case every period is written as text.
    pub fn from_records(records: &[FinancialRecord]) -> Result<Self> {
        let mut columns = Vec::with_capacity(REQUIRED_COLUMNS.len());
        columns.push(period_column(records));

        for name in &REQUIRED_COLUMNS[1..] {
            let values: Vec<f64> = records
                .iter()
                .map(|r| r.line_item(name).unwrap_or(f64::NAN))
                .collect();
            columns.push(Column::new((*name).into(), values));
        }

        Ok(Self::new(DataFrame::new(columns)?))
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Returns the number of reporting periods (rows).
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Returns the column names in input order.
    pub fn columns(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Extracts one typed record per row, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BilanError::MissingColumns`] if the table does not
    /// satisfy the schema, or a Polars error if a column cannot be cast.
    pub fn records(&self) -> Result<Vec<FinancialRecord>> {
        ensure_schema(self)?;

        let periods = self.periods()?;
        let revenue = self.line_items("revenue")?;
        let cogs = self.line_items("cogs")?;
        let operating_income = self.line_items("operating_income")?;
        let net_income = self.line_items("net_income")?;
        let total_assets = self.line_items("total_assets")?;
        let total_equity = self.line_items("total_equity")?;
        let total_liabilities = self.line_items("total_liabilities")?;
        let current_assets = self.line_items("current_assets")?;
        let current_liabilities = self.line_items("current_liabilities")?;
        let cash = self.line_items("cash")?;
        let marketable_securities = self.line_items("marketable_securities")?;
        let accounts_receivable = self.line_items("accounts_receivable")?;
        let inventory = self.line_items("inventory")?;
        let interest_expense = self.line_items("interest_expense")?;

        let records = periods
            .into_iter()
            .enumerate()
            .map(|(i, period)| FinancialRecord {
                period,
                revenue: revenue[i],
                cogs: cogs[i],
                operating_income: operating_income[i],
                net_income: net_income[i],
                total_assets: total_assets[i],
                total_equity: total_equity[i],
                total_liabilities: total_liabilities[i],
                current_assets: current_assets[i],
                current_liabilities: current_liabilities[i],
                cash: cash[i],
                marketable_securities: marketable_securities[i],
                accounts_receivable: accounts_receivable[i],
                inventory: inventory[i],
                interest_expense: interest_expense[i],
            })
            .collect();

        Ok(records)
    }

    /// Reads the `period` column. Integer columns keep their numeric keys,
    /// anything else is cast to text. Nulls become [`Period::Missing`].
    fn periods(&self) -> Result<Vec<Period>> {
        let column = self.data.column("period")?;

        let periods = if column.dtype().is_integer() {
            column
                .cast(&DataType::Int64)?
                .as_materialized_series()
                .i64()?
                .into_iter()
                .map(|key| key.map_or(Period::Missing, Period::Number))
                .collect()
        } else {
            column
                .cast(&DataType::String)?
                .as_materialized_series()
                .str()?
                .into_iter()
                .map(|label| label.map_or(Period::Missing, Period::new))
                .collect()
        };
        Ok(periods)
    }

    /// Reads a numeric column as `f64`. Nulls and unparseable cells become NaN.
    fn line_items(&self, name: &str) -> Result<Vec<f64>> {
        let column = self.data.column(name)?.cast(&DataType::Float64)?;
        let values = column
            .as_materialized_series()
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();
        Ok(values)
    }
}

fn period_column(records: &[FinancialRecord]) -> Column {
    let has_labels = records.iter().any(|r| matches!(r.period, Period::Label(_)));

    if has_labels {
        let labels: Vec<Option<String>> = records
            .iter()
            .map(|r| (!r.period.is_missing()).then(|| r.period.to_string()))
            .collect();
        Column::new("period".into(), labels)
    } else {
        let keys: Vec<Option<i64>> = records
            .iter()
            .map(|r| match r.period {
                Period::Number(key) => Some(key),
                _ => None,
            })
            .collect();
        Column::new("period".into(), keys)
    }
}

impl From<DataFrame> for FinancialStatements {
    fn from(data: DataFrame) -> Self {
        Self::new(data)
    }
}

impl AsRef<DataFrame> for FinancialStatements {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}
