#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bilan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # bilan
//!
//! bilan is an umbrella crate that re-exports the bilan sub-crates behind a
//! single dependency.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bilan::prelude::*;
//!
//! # fn main() -> bilan::Result<()> {
//! let statements = FinancialStatements::new(df);
//! let missing = validate(&statements);
//! assert!(missing.is_empty());
//!
//! let ratios = RatioEngine::default().compute(&statements)?;
//! for row in &ratios {
//!     println!("{} {:.4}", row.period, row.gross_margin);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`types`] - Statement table, typed records, schema contract, errors
//! - [`ratios`] - Ratio engine and ratio table
//! - [`report`] - Workbook and chart output

/// Version information for the bilan crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Statement Types
// ============================================================================

/// Financial statement types and the input schema.
///
/// A statement table must contain the fifteen columns of
/// [`REQUIRED_COLUMNS`]; [`validate`] lists the ones that are missing.
pub mod types {
    pub use bilan_types::*;
}

pub use bilan_types::{
    BilanError, FinancialRecord, FinancialStatements, Period, REQUIRED_COLUMNS, Result, validate,
};

// ============================================================================
// Ratio Engine
// ============================================================================

/// Ratio computation.
///
/// ## Formulas
///
/// ```text
/// gross_margin      = (revenue - cogs) / (revenue + ε)
/// operating_margin  = operating_income / (revenue + ε)
/// net_margin        = net_income / (revenue + ε)
/// current_ratio     = current_assets / (current_liabilities + ε)
/// quick_ratio       = (cash + marketable_securities + accounts_receivable)
///                     / (current_liabilities + ε)
/// debt_to_equity    = total_liabilities / (total_equity + ε)
/// asset_turnover    = revenue / (total_assets + ε)
/// roa               = net_income / (total_assets + ε)
/// roe               = net_income / (total_equity + ε)
/// interest_coverage = operating_income / (interest_expense + ε)
///
/// revenue_growth_yoy[t]    = (revenue[t] - revenue[t-1]) / revenue[t-1]
/// net_income_growth_yoy[t] = (net_income[t] - net_income[t-1]) / net_income[t-1]
/// ```
///
/// ε defaults to 1e-9. Growth denominators are not shifted, so a zero prior
/// value produces an infinite or NaN growth rate.
pub mod ratios {
    pub use bilan_ratios::*;
}

pub use bilan_ratios::{RatioConfig, RatioEngine, RatioMetric, RatioRecord, RatioTable};

// ============================================================================
// Report Output
// ============================================================================

/// Workbook and chart output.
pub mod report {
    pub use bilan_report::*;
}

pub use bilan_report::{ReportConfig, ReportError, ReportPaths, ReportWriter};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use bilan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BilanError, FinancialRecord, FinancialStatements, Period, RatioConfig, RatioEngine,
        RatioMetric, RatioRecord, RatioTable, ReportConfig, ReportWriter, Result, validate,
    };
}

// ============================================================================
// Tests
// ============================================================================
