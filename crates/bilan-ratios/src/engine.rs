//! Ratio computation.

use bilan_types::{FinancialRecord, FinancialStatements, Result};
use tracing::{debug, warn};

use crate::{RatioConfig, RatioRecord, RatioTable, period_over_period};

/// Computes the per-period ratios of one record.
///
/// Every denominator is shifted by `epsilon`. Growth fields are left `None`
/// since they depend on the neighbouring period; [`RatioEngine`] fills them in
/// after sorting.
pub fn ratios_for(record: &FinancialRecord, epsilon: f64) -> RatioRecord {
    let revenue = record.revenue + epsilon;
    let current_liabilities = record.current_liabilities + epsilon;
    let total_assets = record.total_assets + epsilon;
    let total_equity = record.total_equity + epsilon;

    let gross_profit = record.revenue - record.cogs;
    let quick_assets = record.cash + record.marketable_securities + record.accounts_receivable;

    RatioRecord {
        period: record.period.clone(),
        gross_margin: gross_profit / revenue,
        operating_margin: record.operating_income / revenue,
        net_margin: record.net_income / revenue,
        current_ratio: record.current_assets / current_liabilities,
        quick_ratio: quick_assets / current_liabilities,
        debt_to_equity: record.total_liabilities / total_equity,
        asset_turnover: record.revenue / total_assets,
        roa: record.net_income / total_assets,
        roe: record.net_income / total_equity,
        interest_coverage: record.operating_income / (record.interest_expense + epsilon),
        revenue_growth_yoy: None,
        net_income_growth_yoy: None,
    }
}

/// Derives the ratio table from financial statements.
///
/// The engine is pure: it never mutates its input and never fails on numeric
/// content. Zero denominators, NaN line items and zero prior-period values
/// show up as non-finite cells in the output.
///
/// # Example
///
/// ```rust,ignore
/// use bilan_ratios::{RatioConfig, RatioEngine};
///
/// let engine = RatioEngine::new(RatioConfig::default().with_epsilon(1e-12));
/// let table = engine.compute(&statements)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioEngine {
    config: RatioConfig,
}

impl RatioEngine {
    /// Create a new engine with the given configuration.
    #[must_use]
    pub const fn new(config: RatioConfig) -> Self {
        Self { config }
    }

    /// Get the denominator stabilizer.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.config.epsilon
    }

    /// Computes ratios for a validated statement table.
    ///
    /// # Errors
    ///
    /// Returns [`bilan_types::BilanError::MissingColumns`] when the table does
    /// not satisfy the schema, or a Polars error if a column cannot be read.
    pub fn compute(&self, statements: &FinancialStatements) -> Result<RatioTable> {
        let records = statements.records()?;
        Ok(self.compute_records(&records))
    }

    /// Computes ratios for typed records given in any order.
    ///
    /// Rows are sorted ascending by period with a stable sort, so periods that
    /// compare equal keep their input order. Growth rates are computed on the
    /// sorted sequence.
    pub fn compute_records(&self, records: &[FinancialRecord]) -> RatioTable {
        let mut ordered: Vec<&FinancialRecord> = records.iter().collect();
        ordered.sort_by(|a, b| a.period.cmp(&b.period));

        let revenue_growth = period_over_period(ordered.iter().map(|r| r.revenue));
        let net_income_growth = period_over_period(ordered.iter().map(|r| r.net_income));

        let rows: Vec<RatioRecord> = ordered
            .iter()
            .zip(revenue_growth)
            .zip(net_income_growth)
            .map(|((record, revenue_growth_yoy), net_income_growth_yoy)| RatioRecord {
                revenue_growth_yoy,
                net_income_growth_yoy,
                ..ratios_for(record, self.config.epsilon)
            })
            .collect();

        let table = RatioTable::new(rows);
        debug!(
            periods = table.len(),
            first = ?table.records().first().map(|r| r.period.to_string()),
            last = ?table.records().last().map(|r| r.period.to_string()),
            "Computed ratio table"
        );

        let anomalies = table.non_finite_count();
        if anomalies > 0 {
            warn!(cells = anomalies, "Ratio table contains non-finite values");
        }

        table
    }
}

/// Computes ratios with the default configuration.
pub fn compute_ratios(statements: &FinancialStatements) -> Result<RatioTable> {
    RatioEngine::default().compute(statements)
}
