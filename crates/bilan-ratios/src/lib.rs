//! Financial ratio engine for bilan.
//!
//! This crate turns a validated statement table into one row of ratios per
//! reporting period:
//! - Margins (gross, operating, net)
//! - Liquidity (current, quick)
//! - Leverage, efficiency and profitability (debt to equity, asset turnover, ROA, ROE)
//! - Interest coverage
//! - Period-over-period growth of revenue and net income
//!
//! # Example
//!
//! ```rust,ignore
//! use bilan_ratios::{RatioConfig, RatioEngine};
//!
//! let engine = RatioEngine::new(RatioConfig::default());
//! let table = engine.compute(&statements)?;
//! let ratios = table.to_dataframe()?;
//! ```

mod config;
mod engine;
mod growth;
mod metric;
mod record;
mod table;

// Re-export main types
pub use config::{DEFAULT_EPSILON, RatioConfig};
pub use engine::{RatioEngine, compute_ratios, ratios_for};
pub use growth::period_over_period;
pub use metric::RatioMetric;
pub use record::{RATIO_COLUMNS, RatioRecord};
pub use table::RatioTable;
