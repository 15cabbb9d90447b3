//! The ratio table produced by the engine.

use bilan_types::Period;
use polars::prelude::*;

use crate::{RatioMetric, RatioRecord};

/// Ratios for every reporting period, sorted ascending by period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioTable {
    records: Vec<RatioRecord>,
}

impl RatioTable {
    /// Wraps already ordered ratio rows.
    pub const fn new(records: Vec<RatioRecord>) -> Self {
        Self { records }
    }

    /// Returns the rows.
    pub fn records(&self) -> &[RatioRecord] {
        &self.records
    }

    /// Returns the number of periods.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the table has no periods.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the period labels in table order.
    pub fn periods(&self) -> Vec<&Period> {
        self.records.iter().map(|r| &r.period).collect()
    }

    /// Returns one metric across all periods.
    pub fn series(&self, metric: RatioMetric) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.get(metric)).collect()
    }

    /// Counts infinite or NaN cells across the table.
    pub fn non_finite_count(&self) -> usize {
        self.records.iter().map(RatioRecord::non_finite_count).sum()
    }

    /// Renders the table as a DataFrame with the columns in
    /// [`crate::RATIO_COLUMNS`] order.
    ///
    /// Periods are written as text. Missing periods and undefined growth
    /// become null; non-finite ratios stay as float values.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns = Vec::with_capacity(RatioMetric::ALL.len() + 1);

        let periods: Vec<Option<String>> = self
            .records
            .iter()
            .map(|r| (!r.period.is_missing()).then(|| r.period.to_string()))
            .collect();
        columns.push(Column::new("period".into(), periods));

        for metric in RatioMetric::ALL {
            columns.push(Column::new(metric.column_name().into(), self.series(metric)));
        }

        DataFrame::new(columns)
    }
}

impl<'a> IntoIterator for &'a RatioTable {
    type Item = &'a RatioRecord;
    type IntoIter = std::slice::Iter<'a, RatioRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
