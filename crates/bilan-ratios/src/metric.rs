//! Names of the derived ratio columns.

use serde::{Deserialize, Serialize};

/// A derived metric in the ratio table.
///
/// Variants are declared in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioMetric {
    /// (revenue - cogs) / revenue
    GrossMargin,
    /// operating_income / revenue
    OperatingMargin,
    /// net_income / revenue
    NetMargin,
    /// current_assets / current_liabilities
    CurrentRatio,
    /// (cash + marketable_securities + accounts_receivable) / current_liabilities
    QuickRatio,
    /// total_liabilities / total_equity
    DebtToEquity,
    /// revenue / total_assets
    AssetTurnover,
    /// net_income / total_assets
    Roa,
    /// net_income / total_equity
    Roe,
    /// operating_income / interest_expense
    InterestCoverage,
    /// Relative change in revenue from the previous period.
    RevenueGrowthYoy,
    /// Relative change in net income from the previous period.
    NetIncomeGrowthYoy,
}

impl RatioMetric {
    /// All metrics in output column order.
    pub const ALL: [Self; 12] = [
        Self::GrossMargin,
        Self::OperatingMargin,
        Self::NetMargin,
        Self::CurrentRatio,
        Self::QuickRatio,
        Self::DebtToEquity,
        Self::AssetTurnover,
        Self::Roa,
        Self::Roe,
        Self::InterestCoverage,
        Self::RevenueGrowthYoy,
        Self::NetIncomeGrowthYoy,
    ];

    /// Column name in the ratio table.
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::GrossMargin => "gross_margin",
            Self::OperatingMargin => "operating_margin",
            Self::NetMargin => "net_margin",
            Self::CurrentRatio => "current_ratio",
            Self::QuickRatio => "quick_ratio",
            Self::DebtToEquity => "debt_to_equity",
            Self::AssetTurnover => "asset_turnover",
            Self::Roa => "roa",
            Self::Roe => "roe",
            Self::InterestCoverage => "interest_coverage",
            Self::RevenueGrowthYoy => "revenue_growth_yoy",
            Self::NetIncomeGrowthYoy => "net_income_growth_yoy",
        }
    }

    /// Human-readable label used in chart legends.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GrossMargin => "Gross Margin",
            Self::OperatingMargin => "Operating Margin",
            Self::NetMargin => "Net Margin",
            Self::CurrentRatio => "Current Ratio",
            Self::QuickRatio => "Quick Ratio",
            Self::DebtToEquity => "Debt To Equity",
            Self::AssetTurnover => "Asset Turnover",
            Self::Roa => "ROA",
            Self::Roe => "ROE",
            Self::InterestCoverage => "Interest Coverage",
            Self::RevenueGrowthYoy => "Revenue Growth YoY",
            Self::NetIncomeGrowthYoy => "Net Income Growth YoY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_are_unique() {
        let mut names: Vec<_> = RatioMetric::ALL.iter().map(|m| m.column_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RatioMetric::ALL.len());
    }

    #[test]
    fn test_labels() {
        assert_eq!(RatioMetric::Roa.label(), "ROA");
        assert_eq!(RatioMetric::GrossMargin.label(), "Gross Margin");
        assert_eq!(RatioMetric::NetIncomeGrowthYoy.column_name(), "net_income_growth_yoy");
    }
}
