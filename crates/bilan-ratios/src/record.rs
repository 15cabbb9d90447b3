//! One row of derived ratios.

use bilan_types::Period;
use serde::{Deserialize, Serialize};

use crate::RatioMetric;

/// Column order of the ratio table.
pub const RATIO_COLUMNS: [&str; 13] = [
    "period",
    "gross_margin",
    "operating_margin",
    "net_margin",
    "current_ratio",
    "quick_ratio",
    "debt_to_equity",
    "asset_turnover",
    "roa",
    "roe",
    "interest_coverage",
    "revenue_growth_yoy",
    "net_income_growth_yoy",
];

/// Derived ratios for one reporting period.
///
/// Ratio fields may be infinite or NaN when inputs are degenerate. Growth
/// fields are `None` for the earliest period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioRecord {
    /// Reporting period label.
    pub period: Period,
    /// Gross profit over revenue.
    pub gross_margin: f64,
    /// Operating income over revenue.
    pub operating_margin: f64,
    /// Net income over revenue.
    pub net_margin: f64,
    /// Current assets over current liabilities.
    pub current_ratio: f64,
    /// Quick assets over current liabilities.
    pub quick_ratio: f64,
    /// Total liabilities over total equity.
    pub debt_to_equity: f64,
    /// Revenue over total assets.
    pub asset_turnover: f64,
    /// Return on assets.
    pub roa: f64,
    /// Return on equity.
    pub roe: f64,
    /// Operating income over interest expense.
    pub interest_coverage: f64,
    /// Revenue growth versus the previous period.
    pub revenue_growth_yoy: Option<f64>,
    /// Net income growth versus the previous period.
    pub net_income_growth_yoy: Option<f64>,
}

impl RatioRecord {
    /// Returns the value of a metric, `None` only for undefined growth.
    pub const fn get(&self, metric: RatioMetric) -> Option<f64> {
        match metric {
            RatioMetric::GrossMargin => Some(self.gross_margin),
            RatioMetric::OperatingMargin => Some(self.operating_margin),
            RatioMetric::NetMargin => Some(self.net_margin),
            RatioMetric::CurrentRatio => Some(self.current_ratio),
            RatioMetric::QuickRatio => Some(self.quick_ratio),
            RatioMetric::DebtToEquity => Some(self.debt_to_equity),
            RatioMetric::AssetTurnover => Some(self.asset_turnover),
            RatioMetric::Roa => Some(self.roa),
            RatioMetric::Roe => Some(self.roe),
            RatioMetric::InterestCoverage => Some(self.interest_coverage),
            RatioMetric::RevenueGrowthYoy => self.revenue_growth_yoy,
            RatioMetric::NetIncomeGrowthYoy => self.net_income_growth_yoy,
        }
    }

    /// Counts metrics holding an infinite or NaN value.
    pub fn non_finite_count(&self) -> usize {
        RatioMetric::ALL
            .into_iter()
            .filter_map(|m| self.get(m))
            .filter(|v| !v.is_finite())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_match_metric_order() {
        assert_eq!(RATIO_COLUMNS[0], "period");
        for (column, metric) in RATIO_COLUMNS[1..].iter().zip(RatioMetric::ALL) {
            assert_eq!(*column, metric.column_name());
        }
    }

    #[test]
    fn test_non_finite_count() {
        let record = RatioRecord {
            period: Period::from("2021"),
            gross_margin: 0.4,
            operating_margin: f64::NAN,
            net_margin: 0.1,
            current_ratio: 2.0,
            quick_ratio: 1.0,
            debt_to_equity: 1.0,
            asset_turnover: 0.5,
            roa: 0.05,
            roe: 0.1,
            interest_coverage: f64::INFINITY,
            revenue_growth_yoy: None,
            net_income_growth_yoy: Some(f64::NEG_INFINITY),
        };
        assert_eq!(record.non_finite_count(), 3);
        assert_eq!(record.get(RatioMetric::RevenueGrowthYoy), None);
    }
}
