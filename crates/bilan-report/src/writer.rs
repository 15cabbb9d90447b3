//! Full report output.

use std::fs;

use bilan_ratios::RatioTable;
use bilan_types::FinancialStatements;
use tracing::info;

use crate::{
    MARGINS_CHART, ROA_ROE_CHART, ReportConfig, ReportPaths, Result, render_chart, write_workbook,
};

/// Writes the workbook and both charts for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    /// Create a new report writer with the given configuration.
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Creates the output directory if needed and returns the artifact paths.
    pub fn prepare(&self) -> Result<ReportPaths> {
        fs::create_dir_all(&self.config.outdir)?;
        Ok(self.config.paths())
    }

    /// Writes all artifacts and returns where they were written.
    ///
    /// The raw sheet receives `statements` exactly as loaded, extra columns
    /// included.
    pub fn write(
        &self,
        statements: &FinancialStatements,
        ratios: &RatioTable,
    ) -> Result<ReportPaths> {
        let paths = self.prepare()?;

        write_workbook(statements.data(), ratios, &paths.workbook)?;
        info!(path = %paths.workbook.display(), periods = ratios.len(), "Wrote workbook");

        render_chart(&MARGINS_CHART, ratios, &paths.margins_chart, self.config.chart_size)?;
        info!(path = %paths.margins_chart.display(), "Wrote margins chart");

        render_chart(&ROA_ROE_CHART, ratios, &paths.roa_roe_chart, self.config.chart_size)?;
        info!(path = %paths.roa_roe_chart.display(), "Wrote ROA/ROE chart");

        Ok(paths)
    }
}
