//! Report emitters for bilan.
//!
//! This crate consumes a computed [`bilan_ratios::RatioTable`] and writes:
//! - `financial_report.xlsx` with a "Raw Data" and a "Ratios" sheet
//! - `margins_by_period.png` plotting gross, operating and net margin
//! - `roa_roe_by_period.png` plotting ROA and ROE
//!
//! Emitters never alter the table. Non-finite cells are written as blanks or
//! `inf` strings in the workbook and left out of the charts.
//!
//! # Example
//!
//! ```rust,ignore
//! use bilan_report::{ReportConfig, ReportWriter};
//!
//! let writer = ReportWriter::new(ReportConfig::new("./out"));
//! let paths = writer.write(&statements, &ratios)?;
//! println!("{}", paths.workbook.display());
//! ```

mod chart;
mod error;
mod excel;
mod layout;
mod writer;

// Re-export main types
pub use chart::{
    ChartSpec, MARGINS_CHART, ROA_ROE_CHART, finite_segments, render_chart, value_bounds,
};
pub use error::{ReportError, Result};
pub use excel::{RATIOS_SHEET, RAW_DATA_SHEET, write_workbook};
pub use layout::{
    MARGINS_CHART_FILE, REPORT_FILE, ROA_ROE_CHART_FILE, ReportConfig, ReportPaths,
};
pub use writer::ReportWriter;
